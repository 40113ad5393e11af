//! Error types for structured error handling.
//!
//! This module provides:
//! - `KinematicsError`: Errors from kinematic aggregation

use thiserror::Error;

/// Categorised kinematics errors.
///
/// These errors indicate precondition violations in the invoking code, not
/// recoverable runtime conditions: the kinematic functions fail fast rather
/// than silently producing NaN.
///
/// # Examples
/// ```
/// use rambo_core::types::KinematicsError;
///
/// let err = KinematicsError::NegativeMassSquared { radicand: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// The Minkowski norm of a four-vector was negative, so no real invariant
    /// mass exists. Indicates a correctness bug upstream (an unphysical
    /// momentum configuration reached the aggregator).
    #[error("negative invariant mass squared {radicand}: unphysical four-momentum")]
    NegativeMassSquared {
        /// The offending radicand `E² − |p|²`.
        radicand: f64,
    },
}
