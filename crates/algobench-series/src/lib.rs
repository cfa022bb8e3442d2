#![warn(missing_docs)]
//! # π series
//!
//! Two convergent series approximating π with fixed-point arithmetic: values are big integers
//! carrying an implicit `10^scale` factor, and every division is an exact integer floor division.
//! No floating point is involved, so the digits produced are exact.
//!
//! - [`Leibniz`]: π = 4·arctan(1/2) + 4·arctan(1/3), the arctangent expansions interleaved;
//! - [`Ramanujan`]: π = 6·arcsin(1/2), with a multiplicative term shrinking by 4 each step.
//!
//! ```
//! use algobench_series::{Leibniz, PiSeries, Ramanujan};
//!
//! assert_eq!("3141592653", Leibniz.digits(10).to_string());
//! assert_eq!("3141592653", Ramanujan.digits(10).to_string());
//! ```
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use std::fmt;

pub mod leibniz;
pub mod ramanujan;

pub use leibniz::{Leibniz, LeibnizSums};
pub use ramanujan::{Ramanujan, RamanujanSums};

/// Extra digits the series are evaluated with before truncating to the requested precision.
///
/// Each iteration loses at most a few units in the last place to floor division; the guard digits
/// absorb that error.
pub const GUARD_DIGITS: u32 = 20;

/// Returns `10^exp` as a big integer.
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10).pow(exp)
}

/// A series converging to π.
pub trait PiSeries {
    /// Name of the series, used in reports.
    fn name(&self) -> &'static str;

    /// Sums the series at a fixed-point scale of `10^scale`, until the terms vanish at that scale.
    ///
    /// The result approximates `π · 10^scale`; its last few digits are off by the accumulated
    /// truncation error.
    fn scaled(&self, scale: u32) -> BigInt;

    /// Returns the first `n` decimal digits of π as an integer, that is `⌊π · 10^(n-1)⌋`.
    ///
    /// Returns 0 when `n` is 0.
    fn digits(&self, n: u32) -> BigInt {
        if n == 0 {
            return BigInt::zero();
        }
        self.scaled(n - 1 + GUARD_DIGITS).div_floor(&pow10(GUARD_DIGITS))
    }
}

/// Runtime selection of a series.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SeriesKind {
    /// See [`Leibniz`].
    Leibniz,
    /// See [`Ramanujan`].
    Ramanujan,
}

impl SeriesKind {
    /// All series, in reporting order.
    pub const ALL: [Self; 2] = [Self::Ramanujan, Self::Leibniz];
}

impl PiSeries for SeriesKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Leibniz => Leibniz.name(),
            Self::Ramanujan => Ramanujan.name(),
        }
    }

    fn scaled(&self, scale: u32) -> BigInt {
        match self {
            Self::Leibniz => Leibniz.scaled(scale),
            Self::Ramanujan => Ramanujan.scaled(scale),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    /// Leading digits of π.
    pub(crate) const PI: &str = "31415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(10)]
    #[case(50)]
    #[case(100)]
    fn test_digits(#[values(SeriesKind::Leibniz, SeriesKind::Ramanujan)] series: SeriesKind, #[case] n: u32) {
        assert_eq!(&PI[..n as usize], series.digits(n).to_string());
    }

    #[rstest]
    fn test_zero_digits(#[values(SeriesKind::Leibniz, SeriesKind::Ramanujan)] series: SeriesKind) {
        assert!(series.digits(0).is_zero());
    }

    #[test]
    fn test_series_agree_on_many_digits() {
        assert_eq!(Leibniz.digits(1000), Ramanujan.digits(1000));
    }
}
