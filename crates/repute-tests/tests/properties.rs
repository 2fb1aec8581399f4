//! Property tests for the metric invariants.

use proptest::prelude::*;
use repute_core::precision::round_to;
use repute_metrics::{gini, lorenz_curve, nakamoto, report};
use repute_tests::helpers::*;

fn positive_sum(values: &[f64]) -> bool {
    values.iter().sum::<f64>() > 0.0
}

proptest! {
    #[test]
    fn equal_values_have_zero_gini(n in 1usize..500, v in 0.001f64..1e6) {
        prop_assert_eq!(gini(&equal(n, v), 3).unwrap(), 0.0);
    }

    #[test]
    fn single_holder_gini_is_one_minus_inverse_n(n in 1usize..2_000, amount in 1.0f64..1e9) {
        let g = gini(&single_holder(n, amount), 6).unwrap();
        let expected = round_to(1.0 - 1.0 / n as f64, 6);
        prop_assert!((g - expected).abs() < 1e-9, "n={}: {} != {}", n, g, expected);
    }

    #[test]
    fn single_holder_nakamoto_score_is_one(n in 1usize..2_000, amount in 1.0f64..1e9) {
        prop_assert_eq!(nakamoto(&single_holder(n, amount), 3).unwrap().score, 1);
    }

    #[test]
    fn nakamoto_score_within_population(values in prop::collection::vec(0.0f64..1e6, 1..400)) {
        prop_assume!(positive_sum(&values));
        let r = nakamoto(&values, 3).unwrap();
        prop_assert!(r.score >= 1);
        prop_assert!(r.score <= values.len());
    }

    #[test]
    fn concentration_never_raises_nakamoto_score(
        stakes in prop::collection::vec(0u32..10_000, 2..100),
        from_seed in any::<usize>(),
        amount in 0u32..10_000,
    ) {
        let values: Vec<f64> = stakes.iter().map(|&s| s as f64).collect();
        prop_assume!(positive_sum(&values));
        let from = from_seed % values.len();
        let concentrated = concentrate(&values, from, amount as f64);

        let before = nakamoto(&values, 3).unwrap().score;
        let after = nakamoto(&concentrated, 3).unwrap().score;
        prop_assert!(after <= before, "score rose from {} to {}", before, after);
    }

    #[test]
    fn lorenz_curve_anchored_and_monotone(values in prop::collection::vec(0.0f64..1e6, 1..400)) {
        prop_assume!(positive_sum(&values));
        let curve = lorenz_curve(&values).unwrap();
        prop_assert_eq!(curve.y[0], 0.0);
        prop_assert_eq!(*curve.y.last().unwrap(), 1.0);
        prop_assert!(curve.y.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn metrics_invariant_under_shuffle(
        values in prop::collection::vec(0.0f64..1e6, 1..200)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let (base, shuffled) = values;
        prop_assume!(positive_sum(&base));
        prop_assert_eq!(report(&base, 3).unwrap(), report(&shuffled, 3).unwrap());
        prop_assert_eq!(lorenz_curve(&base).unwrap(), lorenz_curve(&shuffled).unwrap());
    }

    #[test]
    fn repeated_calls_are_deterministic(seed in any::<u64>(), n in 1usize..300) {
        let values = heavy_tailed(n, seed);
        prop_assert_eq!(report(&values, 3).unwrap(), report(&values, 3).unwrap());
    }
}
