//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! It avoids SIMD/unsafe and focuses on stable semantics.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.len_sq().sqrt()
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Normalizes in place. A zero vector is left as is.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self = self.scale(1.0 / mag);
        }
    }

    /// Returns a normalized copy; zero stays zero.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }

    /// Component-wise clamp into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            self.z.clamp(min.z, max.z),
        )
    }

    /// Largest absolute per-component difference.
    pub fn max_abs_diff(self, rhs: Self) -> f32 {
        (self.x - rhs.x)
            .abs()
            .max((self.y - rhs.y).abs())
            .max((self.z - rhs.z).abs())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_lerp_midpoint() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 4.0, 6.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn vec3_lerp_clamps_parameter() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(a.lerp(b, -0.5), a);
        assert_eq!(a.lerp(b, 1.5), b);
    }

    #[test]
    fn vec3_magnitude() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vec3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn vec3_normalize_unit_length() {
        let mut v = Vec3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < 1e-6);
        assert!((v.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn vec3_normalize_zero_is_noop() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert_eq!(v, Vec3::ZERO);
        assert!(v.x.is_finite());
    }

    #[test]
    fn vec3_clamp_per_component() {
        let v = Vec3::new(-5.0, 0.5, 9.0);
        let c = v.clamp(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(c, Vec3::new(-1.0, 0.5, 1.0));
    }

    #[test]
    fn vec3_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.max_abs_diff(b), 2.5);
    }
}
