//! Conservation-enforcing boost and rescale.
//!
//! This is the algorithmic core of the generator. The sampled output set of
//! an event has some total momentum `P` and total invariant mass `M_out`;
//! the input side has total mass `M_in` and zero net momentum. Each output
//! momentum is put through the closed-form conform transformation of the
//! RAMBO algorithm:
//!
//! 1. a Lorentz boost with velocity `-P/M_out` into the frame where the
//!    output total is at rest, then
//! 2. a uniform rescale by `X = M_in / M_out` so the total energy matches
//!    the input side exactly.
//!
//! After the correction the output total four-momentum equals the input
//! total to numerical precision, and each output stays massless: boosts and
//! uniform rescales both preserve null vectors. No iteration is involved;
//! this is an exact construction, not an approximate solver.

use rambo_core::kinematics::{invariant_mass, momentum_sum};
use rambo_core::types::FourVector;

use super::error::GeneratorError;

/// Applies the conservation-enforcing boost and rescale to one event's
/// sampled output set, in place.
///
/// `m_in` is the total invariant mass of the event's input side (for the
/// colliding-beam model, the centre-of-mass energy).
///
/// For each output momentum `(E, p)`, with `G = P.e/M_out`, `A = 1/(1+G)`
/// and boost vector `B = -P_spatial/M_out`:
///
/// ```text
/// BQ = B·p
/// E' = X·(G·E + BQ)
/// p' = X·(p + B·(E + A·BQ))
/// ```
///
/// # Errors
///
/// - [`GeneratorError::DegenerateEvent`] if `M_out == 0`, which requires
///   every sampled momentum to be exactly the zero vector (measure-zero
///   draw). Not retried: a precondition violation, not a recoverable state.
/// - [`GeneratorError::Kinematics`] if the total momentum is spacelike,
///   which cannot happen for physical (null, forward-in-time) samples.
pub fn enforce_conservation(
    outputs: &mut [FourVector<f64>],
    m_in: f64,
) -> Result<(), GeneratorError> {
    let total = momentum_sum(outputs);
    let m_out = invariant_mass(&total)?;
    if m_out == 0.0 {
        return Err(GeneratorError::DegenerateEvent);
    }

    let g = total.e / m_out;
    let x = m_in / m_out;
    let a = 1.0 / (1.0 + g);
    let bx = -total.px / m_out;
    let by = -total.py / m_out;
    let bz = -total.pz / m_out;

    for p in outputs.iter_mut() {
        let bq = bx * p.px + by * p.py + bz * p.pz;
        let e = p.e;
        let c1 = e + a * bq;
        *p = FourVector::new(
            x * (g * e + bq),
            x * (p.px + bx * c1),
            x * (p.py + by * c1),
            x * (p.pz + bz * c1),
        );
    }

    Ok(())
}
