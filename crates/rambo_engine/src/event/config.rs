//! Generator configuration.
//!
//! This module provides configuration types and a builder for phase-space
//! generation runs: centre-of-mass energy, event counts, output multiplicity,
//! and the randomness policy.

use super::error::ConfigError;

/// Maximum number of events allowed per generation call.
pub const MAX_POINTS: usize = 10_000_000;

/// Maximum number of output particles allowed per event.
pub const MAX_OUT: usize = 10_000;

/// Randomness policy for the isotropic output sampler.
///
/// Both policies implement the same capability interface
/// ([`UniformSource`](crate::rng::UniformSource)); they differ in state
/// ownership and reproducibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomPolicy {
    /// One seeded generator driven by a sequential event loop.
    ///
    /// Single-producer discipline; same seed produces bit-identical output.
    Seeded {
        /// Seed for the shared generator.
        seed: u64,
    },

    /// One independently entropy-seeded generator per parallel worker.
    ///
    /// Lock-free sampling across a Rayon pool; no reproducibility guarantee
    /// between runs.
    #[default]
    PerWorker,
}

/// Phase-space generator configuration.
///
/// Immutable configuration specifying generation parameters.
/// Use [`GeneratorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use rambo_engine::{GeneratorConfig, RandomPolicy};
///
/// let config = GeneratorConfig::builder()
///     .ecms(100.0)
///     .n_points(1_000)
///     .n_out(4)
///     .policy(RandomPolicy::Seeded { seed: 42 })
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.ecms(), 100.0);
/// assert_eq!(config.n_out(), 4);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Centre-of-mass energy of the colliding beams.
    ecms: f64,
    /// Number of independent events to generate.
    n_points: usize,
    /// Number of output particles per event.
    n_out: usize,
    /// Randomness policy for the sampler.
    policy: RandomPolicy,
}

impl GeneratorConfig {
    /// Number of input particles per event. The colliding-beam model is
    /// fixed at two; every stage shares this constant.
    pub const N_IN: usize = 2;

    /// Components per four-vector in the flat boundary buffer.
    pub const VEC_WIDTH: usize = 4;

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the centre-of-mass energy.
    #[inline]
    pub fn ecms(&self) -> f64 {
        self.ecms
    }

    /// Returns the number of events to generate.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns the number of output particles per event.
    #[inline]
    pub fn n_out(&self) -> usize {
        self.n_out
    }

    /// Returns the randomness policy.
    #[inline]
    pub fn policy(&self) -> RandomPolicy {
        self.policy
    }

    /// Returns the flat length of one event record:
    /// `(N_IN + n_out) * VEC_WIDTH`.
    #[inline]
    pub fn record_len(&self) -> usize {
        (Self::N_IN + self.n_out) * Self::VEC_WIDTH
    }

    /// Returns the flat length of the full point collection:
    /// `n_points * (N_IN + n_out) * VEC_WIDTH`.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.n_points * self.record_len()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `ecms` is negative or non-finite
    /// - `n_points` is 0 or greater than [`MAX_POINTS`]
    /// - `n_out` is 0 or greater than [`MAX_OUT`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ecms.is_finite() || self.ecms < 0.0 {
            return Err(ConfigError::InvalidEnergy(self.ecms));
        }
        if self.n_points == 0 || self.n_points > MAX_POINTS {
            return Err(ConfigError::InvalidPointCount(self.n_points));
        }
        if self.n_out == 0 || self.n_out > MAX_OUT {
            return Err(ConfigError::InvalidOutCount(self.n_out));
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Provides a fluent API for constructing generator configurations with
/// validation at `build()`.
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    ecms: Option<f64>,
    n_points: Option<usize>,
    n_out: Option<usize>,
    policy: RandomPolicy,
}

impl GeneratorConfigBuilder {
    /// Sets the centre-of-mass energy.
    #[inline]
    pub fn ecms(mut self, ecms: f64) -> Self {
        self.ecms = Some(ecms);
        self
    }

    /// Sets the number of events to generate.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the number of output particles per event.
    #[inline]
    pub fn n_out(mut self, n_out: usize) -> Self {
        self.n_out = Some(n_out);
        self
    }

    /// Sets the randomness policy.
    #[inline]
    pub fn policy(mut self, policy: RandomPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// Unset fields take values that validation rejects (`NaN` energy, zero
    /// counts), so an incomplete builder cannot produce a runnable
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on any out-of-range parameter; see
    /// [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let config = GeneratorConfig {
            ecms: self.ecms.unwrap_or(f64::NAN),
            n_points: self.n_points.unwrap_or(0),
            n_out: self.n_out.unwrap_or(0),
            policy: self.policy,
        };
        config.validate()?;
        Ok(config)
    }
}
