use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::line::LineNum;
use crate::{ATOM, CHECK_TOL};

/// Numerical point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointNum {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointNum {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &PointNum) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared Euclidean distance to another point.
    pub fn distance2(&self, other: &PointNum) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Midpoint of the segment to `other`.
    pub fn midpoint(&self, other: &PointNum) -> PointNum {
        PointNum::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Dot product with another point treated as a vector.
    pub fn dot(&self, other: &PointNum) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z component) with another point treated as a vector.
    pub fn cross(&self, other: &PointNum) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector norm.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotates the vector by the angle with the given sine and cosine.
    pub fn rotate(&self, sinb: f64, cosb: f64) -> PointNum {
        PointNum::new(
            self.x * cosb - self.y * sinb,
            self.x * sinb + self.y * cosb,
        )
    }

    /// Rotates the vector by `ang` radians.
    pub fn rotatea(&self, ang: f64) -> PointNum {
        self.rotate(ang.sin(), ang.cos())
    }

    /// Whether the two points coincide within the identity tolerance.
    pub fn close(&self, other: &PointNum) -> bool {
        (self.x - other.x).abs() < ATOM && (self.y - other.y).abs() < ATOM
    }

    /// Whether the two points coincide within the predicate tolerance.
    pub fn is_same(&self, other: &PointNum) -> bool {
        self.distance(other) <= CHECK_TOL
    }

    /// Orthogonal projection of the point onto `line`.
    pub fn foot(&self, line: &LineNum) -> PointNum {
        let (a, b, c) = line.coefficients();
        let d = a * a + b * b;
        let t = (a * self.x + b * self.y + c) / d;
        PointNum::new(self.x - a * t, self.y - b * t)
    }
}

impl Add for PointNum {
    type Output = PointNum;

    fn add(self, rhs: PointNum) -> PointNum {
        PointNum::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointNum {
    type Output = PointNum;

    fn sub(self, rhs: PointNum) -> PointNum {
        PointNum::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for PointNum {
    type Output = PointNum;

    fn mul(self, f: f64) -> PointNum {
        PointNum::new(self.x * f, self.y * f)
    }
}

impl Div<f64> for PointNum {
    type Output = PointNum;

    fn div(self, f: f64) -> PointNum {
        PointNum::new(self.x / f, self.y / f)
    }
}

impl Neg for PointNum {
    type Output = PointNum;

    fn neg(self) -> PointNum {
        PointNum::new(-self.x, -self.y)
    }
}
