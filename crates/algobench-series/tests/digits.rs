use algobench_series::{Leibniz, PiSeries, Ramanujan, SeriesKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn proptest_series_agree(n in 0..600u32) {
        prop_assert_eq!(Leibniz.digits(n), Ramanujan.digits(n));
    }

    #[test]
    fn proptest_digits_are_prefixes(n in 1..400u32, extra in 1..200u32) {
        for series in SeriesKind::ALL {
            let short = series.digits(n).to_string();
            let long = series.digits(n + extra).to_string();
            prop_assert_eq!(n as usize, short.len());
            prop_assert!(long.starts_with(&short), "{series}: {long} does not start with {short}");
        }
    }
}
