//! Property-based tests for trait vectors, group shares, and hexagram structure.

use proptest::prelude::*;

use augur_core::models::{GroupWeights, HexagramId, TraitVector};

proptest! {
    /// Validated vectors accept exactly the non-negative finite inputs.
    #[test]
    fn prop_trait_vector_rejects_negative(components in prop::array::uniform8(-10.0f64..10.0)) {
        let valid = components.iter().all(|c| *c >= 0.0);
        prop_assert_eq!(TraitVector::try_new(components).is_ok(), valid);
    }

    /// Clamped vectors never carry a negative component.
    #[test]
    fn prop_clamped_non_negative(components in prop::array::uniform8(-10.0f64..10.0)) {
        let v = TraitVector::clamped(components);
        prop_assert!(v.components().iter().all(|c| *c >= 0.0));
    }

    /// Normalized shares sum to one and balance stays in [0, 1].
    #[test]
    fn prop_shares_normalize(a in 0.0f64..50.0, b in 0.0f64..50.0, c in 0.0f64..50.0) {
        let weights = GroupWeights { a, b, c };
        match weights.normalized() {
            Some(shares) => {
                prop_assert!((shares.total() - 1.0).abs() < 1e-9);
                prop_assert!((0.0..=1.0).contains(&shares.balance()));
            }
            None => prop_assert!(weights.total() <= 0.0),
        }
    }

    /// Plurality is a multiple of 1/3 within [0, 1].
    #[test]
    fn prop_plurality_in_thirds(raw in 1u32..=64) {
        let p = HexagramId::new(raw).unwrap().plurality();
        prop_assert!((0.0..=1.0).contains(&p));
        let thirds = p * 3.0;
        prop_assert!((thirds - thirds.round()).abs() < 1e-9);
    }
}
