//! Arctangent series: π = 4·arctan(1/2) + 4·arctan(1/3).
use crate::{pow10, PiSeries};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Alternating arctangent series.
///
/// Two numerators, `4·(1/2)^(2k+1)` and `4·(1/3)^(2k+1)` at the fixed-point scale, are divided by
/// `-4` and `-9` at each step; their sum, divided by the `k`-th odd integer, is added to the
/// partial sum. The sum stops when both numerators reach zero.
#[derive(Debug, Copy, Clone, Default)]
pub struct Leibniz;

impl PiSeries for Leibniz {
    fn name(&self) -> &'static str {
        "leibniz"
    }

    #[profiling::function]
    fn scaled(&self, scale: u32) -> BigInt {
        let mut sums = LeibnizSums::new(scale);
        while sums.step() {}
        log::trace!("leibniz: scale {scale}, {} terms", sums.terms);
        sums.sum
    }
}

/// Partial sums of the [`Leibniz`] series at a given scale.
///
/// Successive partial sums alternate around `π · 10^scale` with a shrinking error.
///
/// ```
/// use algobench_series::LeibnizSums;
///
/// let sums: Vec<_> = LeibnizSums::new(4).take(3).map(|s| s.to_string()).collect();
/// assert_eq!(vec!["33333", "31172", "31454"], sums);
/// ```
#[derive(Debug, Clone)]
pub struct LeibnizSums {
    halves: BigInt,
    thirds: BigInt,
    divisor: BigInt,
    sum: BigInt,
    terms: usize,
}

impl LeibnizSums {
    /// Start the series at a fixed-point scale of `10^scale`.
    pub fn new(scale: u32) -> Self {
        let one = pow10(scale);
        Self {
            halves: &one * 2u32,
            thirds: (&one * 4u32).div_floor(&BigInt::from(3)),
            divisor: BigInt::one(),
            sum: BigInt::zero(),
            terms: 0,
        }
    }

    /// Current partial sum.
    pub fn sum(&self) -> &BigInt {
        &self.sum
    }

    /// Number of terms added so far.
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// Adds the next term. Returns false once the increment is zero.
    fn step(&mut self) -> bool {
        let increment = &self.halves + &self.thirds;
        if increment.is_zero() {
            return false;
        }
        self.sum += increment.div_floor(&self.divisor);
        self.halves = self.halves.div_floor(&BigInt::from(-4));
        self.thirds = self.thirds.div_floor(&BigInt::from(-9));
        self.divisor += 2;
        self.terms += 1;
        true
    }
}

impl Iterator for LeibnizSums {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().then(|| self.sum.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::PI;
    use num_traits::Signed;

    #[test]
    fn test_starting_numerators() {
        let sums = LeibnizSums::new(3);
        assert_eq!(BigInt::from(2000), sums.halves);
        assert_eq!(BigInt::from(1333), sums.thirds);
        assert_eq!(0, sums.terms());
    }

    #[test]
    fn test_errors_shrink() {
        let scale = 30;
        let target: BigInt = PI[..=scale as usize].parse().unwrap();
        // Below this the truncation error dominates
        let noise = BigInt::from(10_000);
        let errors: Vec<BigInt> = LeibnizSums::new(scale)
            .map(|s| (s - &target).abs())
            .take_while(|e| *e > noise)
            .collect();

        assert!(errors.len() > 10);
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "{} >= {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_terminates_on_zero_increment() {
        let mut sums = LeibnizSums::new(0);
        while sums.step() {}
        assert!((&sums.halves + &sums.thirds).is_zero());
        assert_eq!(2, sums.terms());
        assert_eq!(BigInt::from(3), Leibniz.digits(1));
    }
}
