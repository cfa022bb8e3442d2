//! Arcsine series: π = 6·arcsin(1/2).
use crate::{pow10, PiSeries};
use num_bigint::BigInt;
use num_traits::Signed;

/// Arcsine series with a term shrinking geometrically.
///
/// Starting from `3 · 10^scale`, the term is multiplied by `i / (4·(i+1))` for odd `i`, and added
/// to the sum divided by `i + 2`. Every value stays non-negative, so truncating division is floor
/// division. The sum stops when the term reaches zero.
#[derive(Debug, Copy, Clone, Default)]
pub struct Ramanujan;

impl PiSeries for Ramanujan {
    fn name(&self) -> &'static str {
        "ramanujan"
    }

    #[profiling::function]
    fn scaled(&self, scale: u32) -> BigInt {
        let mut sums = RamanujanSums::new(scale);
        while sums.step() {}
        log::trace!("ramanujan: scale {scale}, {} terms", sums.terms);
        sums.sum
    }
}

/// Partial sums of the [`Ramanujan`] series at a given scale.
///
/// Partial sums never decrease, and stay below `π · 10^scale`.
///
/// ```
/// use algobench_series::RamanujanSums;
///
/// let sums: Vec<_> = RamanujanSums::new(4).take(3).map(|s| s.to_string()).collect();
/// assert_eq!(vec!["31250", "31390", "31410"], sums);
/// ```
#[derive(Debug, Clone)]
pub struct RamanujanSums {
    term: BigInt,
    sum: BigInt,
    odd: u64,
    terms: usize,
}

impl RamanujanSums {
    /// Start the series at a fixed-point scale of `10^scale`.
    pub fn new(scale: u32) -> Self {
        let term = pow10(scale) * 3u32;
        Self {
            sum: term.clone(),
            term,
            odd: 1,
            terms: 0,
        }
    }

    /// Current partial sum.
    pub fn sum(&self) -> &BigInt {
        &self.sum
    }

    /// Number of terms added after the leading 3.
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// Adds the next term. Returns false once the term is zero.
    fn step(&mut self) -> bool {
        if !self.term.is_positive() {
            return false;
        }
        let i = self.odd;
        self.term = &self.term * i / ((i + 1) * 4);
        self.sum += &self.term / (i + 2);
        self.odd += 2;
        self.terms += 1;
        true
    }
}

impl Iterator for RamanujanSums {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().then(|| self.sum.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::PI;

    #[test]
    fn test_sums_increase_towards_pi() {
        let scale = 40;
        let bound: BigInt = PI[..=scale as usize].parse::<BigInt>().unwrap() + 1;
        let sums: Vec<BigInt> = RamanujanSums::new(scale).collect();

        assert!(sums.len() > 20);
        for pair in sums.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(sums.iter().all(|s| *s <= bound));
    }
}
