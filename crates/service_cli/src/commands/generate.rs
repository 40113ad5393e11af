//! Generate command implementation
//!
//! Invokes the phase-space kernel and reduces the flat buffer into a
//! conservation-residual summary. All physics lives in `rambo_engine`; this
//! command only chooses parameters and consumes the boundary buffer.

use tracing::info;

use rambo_core::kinematics::momentum_sum;
use rambo_core::types::FourVector;
use rambo_engine::{GeneratorConfig, PhaseSpaceGenerator, RandomPolicy};

use crate::{CliError, Result};

const N_IN: usize = 2;
const VEC_WIDTH: usize = 4;

/// Run the generate command
pub fn run(
    ecms: f64,
    points: usize,
    n_out: usize,
    seed: Option<u64>,
    threads: Option<usize>,
) -> Result<()> {
    info!("Starting phase-space generation...");
    info!("  Centre-of-mass energy: {}", ecms);
    info!("  Events: {}", points);
    info!("  Outputs per event: {}", n_out);

    if seed.is_some() && threads.is_some() {
        return Err(CliError::InvalidArgument(
            "--threads applies to the per-worker policy; seeded runs are sequential".to_string(),
        ));
    }

    let policy = match seed {
        Some(seed) => {
            info!("  Policy: seeded (seed = {})", seed);
            RandomPolicy::Seeded { seed }
        }
        None => {
            info!("  Policy: per-worker entropy");
            RandomPolicy::PerWorker
        }
    };

    if let Some(n) = threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
        info!("  Worker threads: {}", n);
    }

    let config = GeneratorConfig::builder()
        .ecms(ecms)
        .n_points(points)
        .n_out(n_out)
        .policy(policy)
        .build()
        .map_err(rambo_engine::GeneratorError::Config)?;

    let buffer = PhaseSpaceGenerator::new(config).generate()?;
    info!("Generated {} values", buffer.len());

    report(&buffer, points, n_out);
    Ok(())
}

/// Downstream reduction over the flat buffer: worst-case conservation
/// residual and output energy range across all events.
fn report(buffer: &[f64], points: usize, n_out: usize) {
    let record_len = (N_IN + n_out) * VEC_WIDTH;
    let mut max_residual = 0.0f64;
    let mut min_energy = f64::INFINITY;
    let mut max_energy = 0.0f64;

    for record in buffer.chunks_exact(record_len) {
        let vectors: Vec<FourVector<f64>> = record
            .chunks_exact(VEC_WIDTH)
            .map(|c| FourVector::from_array([c[0], c[1], c[2], c[3]]))
            .collect();
        let (inputs, outputs) = vectors.split_at(N_IN);

        let residual = momentum_sum(inputs) - momentum_sum(outputs);
        let residual_norm =
            (residual.e * residual.e + residual.spatial_norm_sq()).sqrt();
        max_residual = max_residual.max(residual_norm);

        for p in outputs {
            min_energy = min_energy.min(p.e);
            max_energy = max_energy.max(p.e);
        }
    }

    println!("\n┌──────────────────────────┬──────────────────┐");
    println!("│ Events                   │ {:>16} │", points);
    println!("│ Outputs per event        │ {:>16} │", n_out);
    println!("│ Max conservation residual│ {:>16.3e} │", max_residual);
    println!("│ Min output energy        │ {:>16.6} │", min_energy);
    println!("│ Max output energy        │ {:>16.6} │", max_energy);
    println!("└──────────────────────────┴──────────────────┘");
}
