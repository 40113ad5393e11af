//! Error types for the event generation kernel.
//!
//! This module defines structured error types for configuration validation
//! and precondition violations in the generation pipeline.

use std::fmt;

use rambo_core::types::KinematicsError;

/// Configuration error for the phase-space generator.
///
/// These errors occur during construction when invalid parameters are
/// provided; generation never starts with an invalid configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Centre-of-mass energy is negative or non-finite.
    InvalidEnergy(f64),
    /// Event count outside valid range [1, 10_000_000].
    InvalidPointCount(usize),
    /// Output particle count outside valid range [1, 10_000].
    InvalidOutCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnergy(ecms) => {
                write!(
                    f,
                    "Invalid centre-of-mass energy {}: must be finite and non-negative",
                    ecms
                )
            }
            Self::InvalidPointCount(count) => {
                write!(
                    f,
                    "Invalid event count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidOutCount(count) => {
                write!(
                    f,
                    "Invalid output particle count {}: must be in range [1, 10_000]",
                    count
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime error from the generation pipeline.
///
/// Every variant is a precondition violation: the pipeline fails fast rather
/// than silently producing NaN momenta, and nothing is retried.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Invalid generator configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Kinematic aggregation hit an unphysical momentum.
    #[error("kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),

    /// The sampled output set of an event had zero total invariant mass, so
    /// the conservation correction would divide by zero. Only possible when
    /// every sampled momentum is exactly the zero vector (a measure-zero
    /// draw); not retried.
    #[error("degenerate event: sampled outputs have zero total invariant mass")]
    DegenerateEvent,
}
