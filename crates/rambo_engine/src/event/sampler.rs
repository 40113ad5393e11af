//! Isotropic output sampler.
//!
//! Each output momentum is sampled independently as a null (lightlike)
//! four-vector with isotropically distributed direction. The radial
//! component is `Q = -ln(q1)` where `q1` is the product of two independent
//! uniforms, which reproduces the non-uniform radial density of the RAMBO
//! algorithm; a single uniform would give the wrong distribution.
//!
//! The per-sample construction, given uniforms `c1`, `f1` and the product
//! `q1`:
//!
//! ```text
//! cos θ = 2·c1 − 1          sin θ = sqrt(1 − cos²θ)
//! φ     = 2π·f1             Q     = −ln(q1)
//! p     = (Q, Q·sinθ·sinφ, Q·sinθ·cosφ, Q·cosθ)
//! ```
//!
//! The px component carries `sin φ` and py carries `cos φ`; this component
//! assignment is part of the reproducibility contract for seeded runs.

use std::f64::consts::PI;

use rambo_core::types::FourVector;

use crate::rng::UniformSource;

/// Draws a single isotropic massless four-momentum.
///
/// Consumes exactly four uniform draws from the source, in the order
/// `c1, f1, u1, u2` with `q1 = u1·u2`. The returned vector satisfies
/// `E² − |p|² = 0` up to floating-point rounding.
#[inline]
pub fn sample_output<S: UniformSource>(source: &mut S) -> FourVector<f64> {
    let c1 = source.draw_uniform();
    let f1 = source.draw_uniform();
    let q1 = source.draw_uniform() * source.draw_uniform();

    let cos_theta = 2.0 * c1 - 1.0;
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let phi = 2.0 * PI * f1;
    let (sin_phi, cos_phi) = phi.sin_cos();
    let q = -q1.ln();

    FourVector::new(
        q,
        q * sin_theta * sin_phi,
        q * sin_theta * cos_phi,
        q * cos_theta,
    )
}

/// Draws the uncorrected output set for one event: `n_out` independent
/// isotropic massless momenta.
pub fn sample_outputs<S: UniformSource>(source: &mut S, n_out: usize) -> Vec<FourVector<f64>> {
    (0..n_out).map(|_| sample_output(source)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededUniform;
    use approx::assert_relative_eq;

    #[test]
    fn test_samples_are_null_vectors() {
        let mut src = SeededUniform::from_seed(42);
        for _ in 0..1000 {
            let p = sample_output(&mut src);
            // E equals |p| by construction; the norm cancels to rounding.
            assert_relative_eq!(
                p.minkowski_norm_sq(),
                0.0,
                epsilon = 1e-9 * p.e * p.e
            );
            assert!(p.e > 0.0);
        }
    }

    #[test]
    fn test_sample_consumes_four_draws() {
        // Two sources from the same seed stay in lockstep only if the
        // per-sample draw count is fixed.
        let mut a = SeededUniform::from_seed(7);
        let mut b = SeededUniform::from_seed(7);

        let _ = sample_output(&mut a);
        for _ in 0..4 {
            b.draw_uniform();
        }
        assert_eq!(sample_output(&mut a), sample_output(&mut b));
    }

    #[test]
    fn test_sample_outputs_length() {
        let mut src = SeededUniform::from_seed(1);
        assert_eq!(sample_outputs(&mut src, 8).len(), 8);
    }

    #[test]
    fn test_radial_component_is_finite() {
        // The source contract excludes 0, so -ln(q1) never overflows to
        // infinity even over many draws.
        let mut src = SeededUniform::from_seed(2024);
        for _ in 0..100_000 {
            let p = sample_output(&mut src);
            assert!(p.e.is_finite());
        }
    }

    #[test]
    fn test_direction_distribution_is_roughly_isotropic() {
        // Crude isotropy check: the mean direction cosine along each axis
        // over many samples should vanish.
        let mut src = SeededUniform::from_seed(314);
        let n = 200_000;
        let (mut sx, mut sy, mut sz) = (0.0, 0.0, 0.0);
        for _ in 0..n {
            let p = sample_output(&mut src);
            sx += p.px / p.e;
            sy += p.py / p.e;
            sz += p.pz / p.e;
        }
        let n = n as f64;
        // generous (>4 sigma) bound for a mean of n direction cosines
        let bound = 2.5 / n.sqrt();
        assert!((sx / n).abs() < bound, "mean x cosine {}", sx / n);
        assert!((sy / n).abs() < bound, "mean y cosine {}", sy / n);
        assert!((sz / n).abs() < bound, "mean z cosine {}", sz / n);
    }
}
