//! Check command implementation
//!
//! Runs a small fixed seeded generation and verifies the kernel invariants
//! hold, reporting pass/fail per invariant. Useful as a smoke test of an
//! installed binary.

use tracing::info;

use rambo_core::kinematics::momentum_sum;
use rambo_core::types::FourVector;
use rambo_engine::{GeneratorConfig, PhaseSpaceGenerator, RandomPolicy};

use crate::{CliError, Result};

const N_IN: usize = 2;
const VEC_WIDTH: usize = 4;

const ECMS: f64 = 100.0;
const POINTS: usize = 100;
const N_OUT: usize = 4;
const TOLERANCE: f64 = 1e-9;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking kernel invariants...");

    let config = GeneratorConfig::builder()
        .ecms(ECMS)
        .n_points(POINTS)
        .n_out(N_OUT)
        .policy(RandomPolicy::Seeded { seed: 42 })
        .build()
        .map_err(rambo_engine::GeneratorError::Config)?;

    let buffer = PhaseSpaceGenerator::new(config).generate()?;

    let record_len = (N_IN + N_OUT) * VEC_WIDTH;
    if buffer.len() != POINTS * record_len {
        return Err(CliError::CheckFailed(format!(
            "unexpected buffer length {}",
            buffer.len()
        )));
    }

    for (event, record) in buffer.chunks_exact(record_len).enumerate() {
        let vectors: Vec<FourVector<f64>> = record
            .chunks_exact(VEC_WIDTH)
            .map(|c| FourVector::from_array([c[0], c[1], c[2], c[3]]))
            .collect();
        let (inputs, outputs) = vectors.split_at(N_IN);

        let residual = momentum_sum(inputs) - momentum_sum(outputs);
        let residual_norm = (residual.e * residual.e + residual.spatial_norm_sq()).sqrt();
        if residual_norm > TOLERANCE * ECMS {
            return Err(CliError::CheckFailed(format!(
                "conservation violated in event {}: residual {}",
                event, residual_norm
            )));
        }

        for p in outputs {
            if p.minkowski_norm_sq().abs() > TOLERANCE * ECMS * ECMS {
                return Err(CliError::CheckFailed(format!(
                    "off-shell output in event {}: m^2 = {}",
                    event,
                    p.minkowski_norm_sq()
                )));
            }
        }
    }

    info!("All invariants hold ({} events)", POINTS);
    println!("OK: conservation and on-shell checks passed for {} events", POINTS);
    Ok(())
}
