//! Input builder: the fixed colliding-beam configuration.
//!
//! Every event shares the same two-beam input block: two massless beams of
//! energy `ecms/2` colliding head-on along the z axis. The builder is a pure
//! function of the centre-of-mass energy; no randomness is involved.

use rambo_core::types::FourVector;

/// Returns the back-to-back beam pair for a given centre-of-mass energy:
/// `pa = (ecms/2, 0, 0, ecms/2)`, `pb = (ecms/2, 0, 0, -ecms/2)`.
///
/// # Examples
///
/// ```rust
/// use rambo_engine::event::inputs::beam_pair;
/// use rambo_core::kinematics::combined_mass;
///
/// let beams = beam_pair(100.0);
/// assert_eq!(combined_mass(&beams).unwrap(), 100.0);
/// ```
#[inline]
pub fn beam_pair(ecms: f64) -> [FourVector<f64>; 2] {
    let half = ecms / 2.0;
    [
        FourVector::new(half, 0.0, 0.0, half),
        FourVector::new(half, 0.0, 0.0, -half),
    ]
}

/// Builds the input blocks for a whole point collection: `n_points` copies
/// of the fixed beam pair.
///
/// The pipeline itself calls [`beam_pair`] per event; this form exists for
/// callers that aggregate over the input side as a group.
pub fn build_inputs(ecms: f64, n_points: usize) -> Vec<[FourVector<f64>; 2]> {
    vec![beam_pair(ecms); n_points]
}
