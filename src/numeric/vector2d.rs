//! Planar vector arithmetic.

use std::ops::{Add, Mul, Neg, Sub};

/// A 2-component vector of `f64`s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in this direction; the zero vector stays zero.
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 { Self::ZERO } else { self * (1.0 / mag) }
    }

    /// Rotates counterclockwise by `radians`.
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Angle from the positive x-axis, in radians.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Distance to another point.
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -1.0);
        assert_eq!(a + b, Vector2D::new(4.0, 1.0));
        assert_eq!(a - b, Vector2D::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
    }

    #[test]
    fn test_products_and_norms() {
        let a = Vector2D::new(3.0, 4.0);
        assert_eq!(a.magnitude(), 5.0);
        assert_eq!(a.dot(Vector2D::new(1.0, 0.0)), 3.0);
        assert_eq!(Vector2D::new(1.0, 0.0).cross(Vector2D::new(0.0, 1.0)), 1.0);

        let unit = a.normalized();
        assert!((unit.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(Vector2D::ZERO.normalized(), Vector2D::ZERO);
    }

    #[test]
    fn test_rotation() {
        let a = Vector2D::new(1.0, 0.0);
        let rotated = a.rotated(std::f64::consts::FRAC_PI_2);
        assert!((rotated.x).abs() < 1e-12);
        assert!((rotated.y - 1.0).abs() < 1e-12);
        assert!((a.angle()).abs() < 1e-12);
    }
}
