//! Phase-space point generation orchestration.
//!
//! This module composes the pipeline stages into whole-collection
//! generation and owns the flat boundary buffer. Per event:
//!
//! 1. build the beam pair and take its combined mass (`M_in`)
//! 2. sample `n_out` isotropic massless momenta
//! 3. apply the conservation-enforcing boost and rescale
//! 4. write `(inputs, corrected outputs)` into the event's flat record
//!
//! Events are independent, so the per-worker policy distributes records over
//! a Rayon pool with one entropy-seeded source per worker; the seeded policy
//! walks the records sequentially with a single source.

use rayon::prelude::*;

use rambo_core::kinematics::combined_mass;
use rambo_core::types::FourVector;

use super::boost::enforce_conservation;
use super::config::{GeneratorConfig, RandomPolicy};
use super::error::GeneratorError;
use super::inputs::beam_pair;
use super::sampler::sample_outputs;
use crate::rng::{EntropyUniform, SeededUniform, UniformSource};

/// Phase-space point generator.
///
/// Holds a validated [`GeneratorConfig`] and produces flat point
/// collections. Each generation call allocates a fresh buffer owned by the
/// caller; the generator itself keeps no mutable state, so one instance can
/// serve repeated calls.
///
/// # Examples
///
/// ```rust
/// use rambo_engine::{GeneratorConfig, PhaseSpaceGenerator, RandomPolicy};
///
/// let config = GeneratorConfig::builder()
///     .ecms(100.0)
///     .n_points(100)
///     .n_out(4)
///     .policy(RandomPolicy::Seeded { seed: 42 })
///     .build()
///     .unwrap();
///
/// let generator = PhaseSpaceGenerator::new(config);
/// let points = generator.generate().unwrap();
/// assert_eq!(points.len(), 100 * (2 + 4) * 4);
/// ```
pub struct PhaseSpaceGenerator {
    config: GeneratorConfig,
}

impl PhaseSpaceGenerator {
    /// Creates a generator from a validated configuration.
    ///
    /// [`GeneratorConfig::builder`] has already validated the parameters, so
    /// construction cannot fail.
    #[inline]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the full point collection as one flat buffer.
    ///
    /// The buffer has length `n_points * (2 + n_out) * 4`, event-major,
    /// input block first, components in `(E, px, py, pz)` order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] on a degenerate event (zero total output
    /// mass) or an unphysical aggregate; neither occurs for valid draws.
    pub fn generate(&self) -> Result<Vec<f64>, GeneratorError> {
        let mut buffer = vec![0.0f64; self.config.buffer_len()];
        let record_len = self.config.record_len();

        match self.config.policy() {
            RandomPolicy::Seeded { seed } => {
                let mut source = SeededUniform::from_seed(seed);
                for record in buffer.chunks_exact_mut(record_len) {
                    self.fill_event(record, &mut source)?;
                }
            }
            RandomPolicy::PerWorker => {
                buffer
                    .par_chunks_exact_mut(record_len)
                    .try_for_each_init(EntropyUniform::from_entropy, |source, record| {
                        self.fill_event(record, source)
                    })?;
            }
        }

        Ok(buffer)
    }

    /// Runs the per-event pipeline and writes the flat record.
    fn fill_event<S: UniformSource>(
        &self,
        record: &mut [f64],
        source: &mut S,
    ) -> Result<(), GeneratorError> {
        let inputs = beam_pair(self.config.ecms());
        let m_in = combined_mass(&inputs)?;

        let mut outputs = sample_outputs(source, self.config.n_out());
        enforce_conservation(&mut outputs, m_in)?;

        write_record(record, &inputs, &outputs);
        Ok(())
    }
}

/// Point assembler: concatenates `(inputs, corrected outputs)` into one flat
/// event record, preserving `(E, px, py, pz)` component order.
///
/// # Panics
///
/// Panics if `record.len() != (inputs.len() + outputs.len()) * 4`; a size
/// mismatch is a programmer error, not a runtime condition.
fn write_record(record: &mut [f64], inputs: &[FourVector<f64>], outputs: &[FourVector<f64>]) {
    assert_eq!(record.len(), (inputs.len() + outputs.len()) * 4);
    let vectors = inputs.iter().chain(outputs.iter());
    for (slot, v) in record.chunks_exact_mut(4).zip(vectors) {
        slot.copy_from_slice(&v.to_array());
    }
}

/// Generates phase-space points with the default per-worker randomness
/// policy.
///
/// Convenience entry point for callers that do not need a seeded run:
/// returns a flat buffer of length `n_points * (2 + n_out) * 4`.
///
/// # Errors
///
/// Returns [`GeneratorError::Config`] for a negative or non-finite `ecms`,
/// `n_points == 0`, or `n_out == 0` (or counts above the documented caps),
/// and propagates pipeline errors as for
/// [`PhaseSpaceGenerator::generate`].
///
/// # Examples
///
/// ```rust
/// use rambo_engine::generate_points;
///
/// let points = generate_points(100.0, 10, 4).unwrap();
/// assert_eq!(points.len(), 10 * (2 + 4) * 4);
/// ```
pub fn generate_points(
    ecms: f64,
    n_points: usize,
    n_out: usize,
) -> Result<Vec<f64>, GeneratorError> {
    let config = GeneratorConfig::builder()
        .ecms(ecms)
        .n_points(n_points)
        .n_out(n_out)
        .policy(RandomPolicy::PerWorker)
        .build()
        .map_err(GeneratorError::Config)?;
    PhaseSpaceGenerator::new(config).generate()
}
