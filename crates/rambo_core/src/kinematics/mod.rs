//! Kinematic aggregation over four-momentum groups.
//!
//! These are the pure reduction functions shared by every stage of the
//! phase-space pipeline: componentwise momentum sums, invariant masses via
//! the Minkowski norm, and the composite `combined_mass` that derives an
//! event's total invariant mass from its particle set.
//!
//! All functions use generic type parameter `T: num_traits::Float` for
//! f32/f64 support.

use num_traits::{Float, ToPrimitive};

use crate::types::{FourVector, KinematicsError};

/// Componentwise sum of a group of four-vectors.
///
/// An empty group sums to the zero vector.
///
/// # Examples
///
/// ```rust
/// use rambo_core::kinematics::momentum_sum;
/// use rambo_core::types::FourVector;
///
/// let group = [
///     FourVector::new(50.0, 0.0, 0.0, 50.0),
///     FourVector::new(50.0, 0.0, 0.0, -50.0),
/// ];
///
/// assert_eq!(momentum_sum(&group), FourVector::new(100.0, 0.0, 0.0, 0.0));
/// ```
#[inline]
pub fn momentum_sum<T: Float>(group: &[FourVector<T>]) -> FourVector<T> {
    group.iter().copied().sum()
}

/// Invariant mass of a four-vector: `sqrt(E² − px² − py² − pz²)`.
///
/// # Errors
///
/// Returns [`KinematicsError::NegativeMassSquared`] if the radicand is
/// negative. This is a precondition violation (an unphysical momentum reached
/// the aggregator), surfaced as a structured error rather than a silent NaN.
///
/// # Examples
///
/// ```rust
/// use rambo_core::kinematics::invariant_mass;
/// use rambo_core::types::FourVector;
///
/// let p = FourVector::new(5.0, 0.0, 3.0, 0.0);
/// assert_eq!(invariant_mass(&p).unwrap(), 4.0);
/// ```
#[inline]
pub fn invariant_mass<T: Float>(v: &FourVector<T>) -> Result<T, KinematicsError> {
    let radicand = v.minkowski_norm_sq();
    if radicand < T::zero() {
        return Err(KinematicsError::NegativeMassSquared {
            radicand: radicand.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(radicand.sqrt())
}

/// Total invariant mass of a four-momentum group.
///
/// Composite of [`momentum_sum`] and [`invariant_mass`]: derives an event's
/// total invariant mass from its input or output particle set.
///
/// # Errors
///
/// Returns [`KinematicsError::NegativeMassSquared`] if the summed momentum is
/// spacelike, which cannot happen for a group of physical (timelike or null,
/// forward-in-time) momenta.
#[inline]
pub fn combined_mass<T: Float>(group: &[FourVector<T>]) -> Result<T, KinematicsError> {
    invariant_mass(&momentum_sum(group))
}
