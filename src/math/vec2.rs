use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A 2D point or vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiplies both components by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector. Zero for the zero vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the vector (unit vector).
    /// If the magnitude is zero, the zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    /// Calculates the squared distance between two points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector about the origin by `angle` radians, counter-clockwise.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Rotates the point about `center` by `angle` radians, counter-clockwise.
    pub fn rotate_around(self, center: Self, angle: f64) -> Self {
        (self - center).rotate(angle) + center
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// Plain IEEE division; callers guard against zero divisors.
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10; // For floating point comparisons

    #[test]
    fn test_vec2_add_sub() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_vec2_scalar_mul() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v, Vec2::new(3.0, 6.0));
        assert_eq!(v.scale(-0.5), Vec2::new(-0.5, -1.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v1.cross(v2) - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let norm_v = v.normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < EPSILON);
        assert!((norm_v.x - 0.6).abs() < EPSILON);
        assert!((norm_v.y - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize_zero_is_noop() {
        let norm_zero = Vec2::ZERO.normalize();
        assert_eq!(norm_zero, Vec2::ZERO);
        assert!(norm_zero.is_finite());
    }

    #[test]
    fn test_vec2_distance_and_midpoint() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0); // Difference is (3.0, 4.0)
        assert!((v1.distance(v2) - 5.0).abs() < EPSILON);
        assert!((v2.distance_squared(v1) - 25.0).abs() < EPSILON);
        assert_eq!(v1.midpoint(v2), Vec2::new(2.5, 4.0));
    }

    #[test]
    fn test_vec2_perpendicular() {
        let v = Vec2::new(3.0, 4.0);
        let perp = v.perpendicular();
        assert_eq!(perp, Vec2::new(-4.0, 3.0));
        assert!(v.dot(perp).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new(1.0, 0.0);
        assert!(v.rotate(PI / 2.0).approx_eq(Vec2::new(0.0, 1.0), EPSILON));
        assert!(v.rotate(PI).approx_eq(Vec2::new(-1.0, 0.0), EPSILON));
        assert!(v.rotate(-PI / 2.0).approx_eq(Vec2::new(0.0, -1.0), EPSILON));
        assert!(Vec2::new(1.0, 1.0)
            .rotate(PI / 2.0)
            .approx_eq(Vec2::new(-1.0, 1.0), EPSILON));
    }

    #[test]
    fn test_vec2_rotate_around() {
        let p = Vec2::new(2.0, 1.0);
        let center = Vec2::new(1.0, 1.0);
        let rotated = p.rotate_around(center, PI / 2.0);
        assert!(rotated.approx_eq(Vec2::new(1.0, 2.0), EPSILON));
        // Distance to the pivot is preserved
        assert!((rotated.distance(center) - 1.0).abs() < EPSILON);
        // Rotating about the origin matches rotate()
        assert!(p.rotate_around(Vec2::ZERO, 0.3).approx_eq(p.rotate(0.3), EPSILON));
    }

    #[test]
    fn test_vec2_display() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
