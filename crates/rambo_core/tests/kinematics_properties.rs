//! Property-based tests for four-vector algebra and kinematic aggregation.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rambo_core::kinematics::{combined_mass, invariant_mass, momentum_sum};
use rambo_core::types::FourVector;

/// Strategy producing physical timelike four-momenta: the energy is
/// generated strictly above the spatial norm, with enough margin that
/// rounding in the norm computation cannot flip the radicand sign.
fn physical_momentum() -> impl Strategy<Value = FourVector<f64>> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
        0.001f64..50.0,
    )
        .prop_map(|(px, py, pz, extra)| {
            let e = (px * px + py * py + pz * pz).sqrt() + extra;
            FourVector::new(e, px, py, pz)
        })
}

proptest! {
    #[test]
    fn momentum_sum_matches_componentwise_fold(
        group in prop::collection::vec(physical_momentum(), 0..8)
    ) {
        let total = momentum_sum(&group);
        let mut expected = FourVector::zero();
        for v in &group {
            expected += *v;
        }
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn invariant_mass_of_physical_momentum_is_real(v in physical_momentum()) {
        let m = invariant_mass(&v).unwrap();
        prop_assert!(m >= 0.0);
        prop_assert!(m.is_finite());
    }

    #[test]
    fn invariant_mass_round_trips_norm(v in physical_momentum()) {
        let m = invariant_mass(&v).unwrap();
        // m² reproduces the radicand within FP tolerance
        assert_relative_eq!(m * m, v.minkowski_norm_sq(), epsilon = 1e-9, max_relative = 1e-9);
    }

    #[test]
    fn minkowski_dot_is_symmetric(a in physical_momentum(), b in physical_momentum()) {
        prop_assert_eq!(a.minkowski_dot(&b), b.minkowski_dot(&a));
    }

    #[test]
    fn combined_mass_at_least_any_single_mass(
        group in prop::collection::vec(physical_momentum(), 1..6)
    ) {
        // For physical momenta the total invariant mass is at least each
        // constituent mass (no cancellation below threshold).
        let total = combined_mass(&group).unwrap();
        for v in &group {
            let m = invariant_mass(v).unwrap();
            prop_assert!(total >= m - 1e-9 * m.max(1.0));
        }
    }
}

#[test]
fn spacelike_momentum_is_rejected() {
    let v = FourVector::new(0.0, 1.0, 0.0, 0.0);
    assert!(invariant_mass(&v).is_err());
}
