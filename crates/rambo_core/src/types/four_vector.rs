//! Relativistic four-vector type.
//!
//! A [`FourVector`] is an energy-momentum vector `(E, px, py, pz)` in natural
//! units (c = 1), with Minkowski metric signature `(+, -, -, -)`. The type is
//! generic over `num_traits::Float`; the engine instantiates it at `f64`.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub};

use num_traits::Float;

/// Energy-momentum four-vector in natural units.
///
/// Components are ordered `(E, px, py, pz)`; this ordering is the contract
/// shared with the flat boundary buffer (see [`to_array`](Self::to_array)).
///
/// # Examples
///
/// ```rust
/// use rambo_core::types::FourVector;
///
/// let p = FourVector::new(50.0, 0.0, 0.0, 50.0);
///
/// // A lightlike (null) vector has zero Minkowski norm
/// assert_eq!(p.minkowski_norm_sq(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourVector<T> {
    /// Energy component (E).
    pub e: T,
    /// Spatial x component (px).
    pub px: T,
    /// Spatial y component (py).
    pub py: T,
    /// Spatial z component (pz).
    pub pz: T,
}

impl<T: Float> FourVector<T> {
    /// Creates a four-vector from its `(E, px, py, pz)` components.
    #[inline]
    pub fn new(e: T, px: T, py: T, pz: T) -> Self {
        Self { e, px, py, pz }
    }

    /// Returns the zero four-vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            e: T::zero(),
            px: T::zero(),
            py: T::zero(),
            pz: T::zero(),
        }
    }

    /// Returns the squared Minkowski norm `E² − px² − py² − pz²`.
    ///
    /// For a physical on-shell particle this equals the rest mass squared and
    /// is non-negative; a negative value indicates an upstream correctness
    /// bug, not a recoverable condition. Square roots of this quantity are
    /// taken only by [`kinematics::invariant_mass`](crate::kinematics::invariant_mass),
    /// which checks the sign.
    #[inline]
    pub fn minkowski_norm_sq(&self) -> T {
        self.e * self.e - self.px * self.px - self.py * self.py - self.pz * self.pz
    }

    /// Returns the Minkowski inner product `E·E' − px·px' − py·py' − pz·pz'`.
    ///
    /// Used when pairing momentum sets: for two massless momenta the product
    /// equals half the invariant mass squared of their sum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rambo_core::types::FourVector;
    ///
    /// let p = FourVector::new(50.0, 0.0, 0.0, 50.0);
    /// let q = FourVector::new(50.0, 0.0, 0.0, -50.0);
    ///
    /// assert_eq!(p.minkowski_dot(&q), 5000.0);
    /// ```
    #[inline]
    pub fn minkowski_dot(&self, other: &Self) -> T {
        self.e * other.e - self.px * other.px - self.py * other.py - self.pz * other.pz
    }

    /// Returns the squared Euclidean norm of the spatial part, `|p|²`.
    #[inline]
    pub fn spatial_norm_sq(&self) -> T {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Returns the components as a `[E, px, py, pz]` array.
    ///
    /// This is the component order of the flat boundary buffer.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.e, self.px, self.py, self.pz]
    }

    /// Creates a four-vector from a `[E, px, py, pz]` array.
    #[inline]
    pub fn from_array(components: [T; 4]) -> Self {
        Self {
            e: components[0],
            px: components[1],
            py: components[2],
            pz: components[3],
        }
    }
}

impl<T: Float> Add for FourVector<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            e: self.e + rhs.e,
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
        }
    }
}

impl<T: Float> AddAssign for FourVector<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Float> Sub for FourVector<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            e: self.e - rhs.e,
            px: self.px - rhs.px,
            py: self.py - rhs.py,
            pz: self.pz - rhs.pz,
        }
    }
}

impl<T: Float> Neg for FourVector<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            e: -self.e,
            px: -self.px,
            py: -self.py,
            pz: -self.pz,
        }
    }
}

impl<T: Float> Sum for FourVector<T> {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_order_round_trip() {
        let p = FourVector::new(4.0, 1.0, 2.0, 3.0);
        assert_eq!(p.to_array(), [4.0, 1.0, 2.0, 3.0]);
        assert_eq!(FourVector::from_array(p.to_array()), p);
    }

    #[test]
    fn test_minkowski_norm_signature() {
        let timelike = FourVector::new(5.0, 0.0, 3.0, 0.0);
        assert_relative_eq!(timelike.minkowski_norm_sq(), 16.0);

        let lightlike = FourVector::new(5.0, 0.0, 0.0, 5.0);
        assert_relative_eq!(lightlike.minkowski_norm_sq(), 0.0);

        let spacelike = FourVector::new(1.0, 2.0, 0.0, 0.0);
        assert!(spacelike.minkowski_norm_sq() < 0.0);
    }

    #[test]
    fn test_dot_reduces_to_norm() {
        let p = FourVector::new(7.0, 1.0, -2.0, 3.0);
        assert_relative_eq!(p.minkowski_dot(&p), p.minkowski_norm_sq());
    }

    #[test]
    fn test_sum_of_back_to_back_beams() {
        let beams = [
            FourVector::new(50.0, 0.0, 0.0, 50.0),
            FourVector::new(50.0, 0.0, 0.0, -50.0),
        ];
        let total: FourVector<f64> = beams.iter().copied().sum();
        assert_eq!(total, FourVector::new(100.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_sub_inverse() {
        let p = FourVector::new(4.0, 1.0, 2.0, 3.0);
        let q = FourVector::new(0.5, -1.5, 2.5, -3.5);
        assert_eq!(p + q - q, p);
        assert_eq!(p + (-p), FourVector::zero());
    }
}
