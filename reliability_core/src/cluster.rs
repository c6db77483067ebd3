//! Cluster composition - Independence-based probability for N units
//!
//! An N-unit cluster succeeds only if every unit succeeds, so the
//! cluster probability is the per-unit probability raised to the Nth
//! power. This applies uniformly to survival probabilities, ignition
//! reliabilities and anything else expressed as a per-unit success
//! chance, and it is always applied after the curve math, never baked
//! into the curves themselves.

/// Probability that all `cluster_size` independent units succeed
pub fn cluster_probability(unit_probability: f64, cluster_size: u32) -> f64 {
    unit_probability.powi(cluster_size as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_unit_is_identity() {
        assert_eq!(cluster_probability(0.9, 1), 0.9);
        assert_eq!(cluster_probability(0.12345, 1), 0.12345);
    }

    #[test]
    fn test_four_engine_cluster() {
        // 0.9^4 = 0.6561
        assert!((cluster_probability(0.9, 4) - 0.6561).abs() < 1e-12);
    }

    #[test]
    fn test_certainty_is_preserved() {
        assert_eq!(cluster_probability(1.0, 9), 1.0);
        assert_eq!(cluster_probability(0.0, 3), 0.0);
    }

    proptest! {
        #[test]
        fn prop_matches_repeated_product(p in 0.0_f64..=1.0, n in 1_u32..=100) {
            let expected = (0..n).fold(1.0_f64, |acc, _| acc * p);
            let got = cluster_probability(p, n);
            prop_assert!((got - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_stays_a_probability(p in 0.0_f64..=1.0, n in 1_u32..=100) {
            let got = cluster_probability(p, n);
            prop_assert!((0.0..=1.0).contains(&got));
        }
    }
}
