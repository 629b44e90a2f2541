//! 3D vector algebra for particle physics.

use crate::float::Float;
use core::ops::{Add, AddAssign, Sub, SubAssign, Neg, Mul, MulAssign};

/// A three-component vector, generic over scalar precision.
///
/// Value type (`Copy`) with operator overloads for by-value arithmetic and
/// a handful of in-place mutators (`normalize`, `invert`, `add_scaled`)
/// used on hot paths to avoid temporaries.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new vector with the given components.
    pub fn new(x: F, y: F, z: F) -> Self {
        Vec3 { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Vec3 { x: F::zero(), y: F::zero(), z: F::zero() }
    }

    /// Magnitude (length).
    pub fn magnitude(self) -> F {
        self.squared_magnitude().sqrt()
    }

    /// Squared magnitude. Cheaper than `magnitude` when only ordering or
    /// comparison is needed.
    pub fn squared_magnitude(self) -> F {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalize to unit length in place. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > F::zero() {
            *self *= F::one() / mag;
        }
    }

    /// Returns a unit-length copy of this vector, or zero if it has no
    /// magnitude.
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Flip all components in place.
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Fused `self += other * scale`.
    pub fn add_scaled(&mut self, other: Self, scale: F) {
        self.x = self.x + other.x * scale;
        self.y = self.y + other.y * scale;
        self.z = self.z + other.z * scale;
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Element-wise product.
    pub fn component_product(self, other: Self) -> Self {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;
    fn mul(self, scale: F) -> Self {
        Vec3 { x: self.x * scale, y: self.y * scale, z: self.z * scale }
    }
}

impl<F: Float> MulAssign<F> for Vec3<F> {
    fn mul_assign(&mut self, scale: F) {
        *self = *self * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_pythagorean() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.magnitude() - 7.0).abs() < 1e-6);
        assert!((v.squared_magnitude() - 49.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let mut v = Vec3::new(3.0f64, -4.0, 12.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_is_noop() {
        let mut v = Vec3::<f32>::zero();
        v.normalize();
        assert_eq!(v, Vec3::zero());
    }

    #[test]
    fn cross_anti_commutes() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let b = Vec3::new(-4.0f32, 5.0, 0.5);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_right_handed_basis() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        assert_eq!(i.cross(j), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn dot_commutes() {
        let a = Vec3::new(1.5f32, -2.0, 0.25);
        let b = Vec3::new(4.0f32, 8.0, -1.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn add_scaled_matches_add_of_scaled() {
        let mut v = Vec3::new(1.0f32, 2.0, 3.0);
        let w = Vec3::new(-0.5f32, 4.0, 1.5);
        let expected = v + w * 2.5;
        v.add_scaled(w, 2.5);
        assert_eq!(v, expected);
    }

    #[test]
    fn component_product_is_elementwise() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let b = Vec3::new(4.0f32, 5.0, 6.0);
        assert_eq!(a.component_product(b), Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn invert_negates_all_components() {
        let mut v = Vec3::new(1.0f32, -2.0, 3.0);
        v.invert();
        assert_eq!(v, Vec3::new(-1.0, 2.0, -3.0));
    }
}
