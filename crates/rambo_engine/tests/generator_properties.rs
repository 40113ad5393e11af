//! End-to-end properties of the phase-space generator.
//!
//! These tests exercise the public boundary (the flat buffer) and verify the
//! physics invariants the generator is built around:
//!
//! 1. **Conservation**: per event, the input and corrected output totals
//!    agree componentwise.
//! 2. **On-shell-ness**: every corrected output is massless.
//! 3. **Input determinism**: each event record starts with the fixed beam
//!    pair regardless of counts or seed.
//! 4. **Shape**: buffer length is exactly `n_points * (2 + n_out) * 4`.
//! 5. **Reproducibility**: seeded runs are bit-identical; per-worker runs
//!    are only required to be valid.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rambo_core::kinematics::{combined_mass, momentum_sum};
use rambo_core::types::FourVector;
use rambo_engine::{generate_points, GeneratorConfig, PhaseSpaceGenerator, RandomPolicy};

const N_IN: usize = 2;
const VEC_WIDTH: usize = 4;

/// Reinterprets one event's flat record as (inputs, outputs) vector groups.
fn split_event(record: &[f64], n_out: usize) -> (Vec<FourVector<f64>>, Vec<FourVector<f64>>) {
    assert_eq!(record.len(), (N_IN + n_out) * VEC_WIDTH);
    let vectors: Vec<FourVector<f64>> = record
        .chunks_exact(VEC_WIDTH)
        .map(|c| FourVector::from_array([c[0], c[1], c[2], c[3]]))
        .collect();
    let (inputs, outputs) = vectors.split_at(N_IN);
    (inputs.to_vec(), outputs.to_vec())
}

fn seeded_points(ecms: f64, n_points: usize, n_out: usize, seed: u64) -> Vec<f64> {
    let config = GeneratorConfig::builder()
        .ecms(ecms)
        .n_points(n_points)
        .n_out(n_out)
        .policy(RandomPolicy::Seeded { seed })
        .build()
        .unwrap();
    PhaseSpaceGenerator::new(config).generate().unwrap()
}

#[test]
fn conservation_holds_per_event() {
    let n_out = 4;
    let points = seeded_points(100.0, 200, n_out, 1);

    for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
        let (inputs, outputs) = split_event(record, n_out);
        let in_total = momentum_sum(&inputs);
        let out_total = momentum_sum(&outputs);

        assert_relative_eq!(in_total.e, out_total.e, max_relative = 1e-9);
        assert_relative_eq!(in_total.px, out_total.px, epsilon = 1e-9 * in_total.e);
        assert_relative_eq!(in_total.py, out_total.py, epsilon = 1e-9 * in_total.e);
        assert_relative_eq!(in_total.pz, out_total.pz, epsilon = 1e-9 * in_total.e);
    }
}

#[test]
fn corrected_outputs_are_on_shell() {
    let n_out = 5;
    let points = seeded_points(100.0, 100, n_out, 2);

    for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
        let (_, outputs) = split_event(record, n_out);
        for p in &outputs {
            // E² − |p|² ≈ 0: massless model
            assert_relative_eq!(
                p.minkowski_norm_sq(),
                0.0,
                epsilon = 1e-9 * p.e.max(1.0).powi(2)
            );
        }
    }
}

#[test]
fn input_block_is_deterministic() {
    // The first 2*4 values of every event equal the fixed beam pair,
    // independent of counts and seed.
    for (n_points, n_out, seed) in [(1, 4, 7u64), (10, 2, 99), (25, 8, 5000)] {
        let points = seeded_points(100.0, n_points, n_out, seed);
        for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
            assert_eq!(
                &record[..N_IN * VEC_WIDTH],
                &[50.0, 0.0, 0.0, 50.0, 50.0, 0.0, 0.0, -50.0]
            );
        }
    }
}

#[test]
fn buffer_shape_is_exact() {
    for (n_points, n_out) in [(1, 4), (10, 2), (100, 8)] {
        let points = generate_points(100.0, n_points, n_out).unwrap();
        assert_eq!(points.len(), n_points * (N_IN + n_out) * VEC_WIDTH);
    }
}

#[test]
fn input_group_combined_mass_is_ecms() {
    let n_out = 4;
    let points = seeded_points(100.0, 20, n_out, 3);
    for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
        let (inputs, _) = split_event(record, n_out);
        assert_eq!(combined_mass(&inputs).unwrap(), 100.0);
    }
}

#[test]
fn seeded_policy_is_reproducible() {
    let a = seeded_points(100.0, 64, 4, 41);
    let b = seeded_points(100.0, 64, 4, 41);
    assert_eq!(a, b);
}

#[test]
fn per_worker_policy_is_tolerated_not_compared() {
    // No determinism requirement either way; both runs must simply satisfy
    // the physics invariants.
    for _ in 0..2 {
        let n_out = 4;
        let points = generate_points(100.0, 50, n_out).unwrap();
        for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
            let (inputs, outputs) = split_event(record, n_out);
            let residual = momentum_sum(&inputs) - momentum_sum(&outputs);
            assert!(residual.e.abs() < 1e-7);
            assert!(residual.spatial_norm_sq() < 1e-14);
        }
    }
}

proptest! {
    // Narrow case count: each case runs a full generation.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn conservation_holds_across_configurations(
        ecms in 1.0f64..1000.0,
        n_points in 1usize..20,
        n_out in 2usize..10,
        seed in any::<u64>(),
    ) {
        let points = seeded_points(ecms, n_points, n_out, seed);
        prop_assert_eq!(points.len(), n_points * (N_IN + n_out) * VEC_WIDTH);

        for record in points.chunks_exact((N_IN + n_out) * VEC_WIDTH) {
            let (inputs, outputs) = split_event(record, n_out);
            let residual = momentum_sum(&inputs) - momentum_sum(&outputs);
            prop_assert!(residual.e.abs() <= 1e-9 * ecms);
            prop_assert!(residual.spatial_norm_sq().sqrt() <= 1e-9 * ecms);
        }
    }
}
