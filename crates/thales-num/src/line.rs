use serde::{Deserialize, Serialize};

use crate::point::PointNum;
use crate::{close_enough, ATOM};

/// Numerical line `a·x + b·y + c = 0` with a canonical coefficient sign.
///
/// Coefficients are normalized so that `a > 0`, or `a = 0` and `b < 0`,
/// which makes equal lines produced from different point pairs compare
/// consistently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineNum {
    a: f64,
    b: f64,
    c: f64,
}

impl LineNum {
    /// Line through two points.
    pub fn through(p1: &PointNum, p2: &PointNum) -> Self {
        Self::from_coefficients(
            p1.y - p2.y,
            p2.x - p1.x,
            p1.x * p2.y - p2.x * p1.y,
        )
    }

    /// Line from raw coefficients, normalizing the sign convention.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Self {
        // With a == 0, assume a = +epsilon > 0; then b such that
        // a·x + b·y = 0 with y > 0 must be negative.
        if a < 0.0 || (a == 0.0 && b > 0.0) {
            Self {
                a: -a,
                b: -b,
                c: -c,
            }
        } else {
            Self { a, b, c }
        }
    }

    /// Raw `(a, b, c)` coefficients.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Evaluates `a·x + b·y + c` at the given point.
    pub fn at(&self, p: &PointNum) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Distance from a point to the line.
    pub fn distance(&self, p: &PointNum) -> f64 {
        self.at(p).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }

    /// The parallel line through `p`.
    pub fn parallel_line(&self, p: &PointNum) -> LineNum {
        LineNum::from_coefficients(self.a, self.b, -self.a * p.x - self.b * p.y)
    }

    /// The perpendicular line through `p`.
    pub fn perpendicular_line(&self, p: &PointNum) -> LineNum {
        let q = *p + PointNum::new(self.a, self.b);
        LineNum::through(p, &q)
    }

    /// Whether the two lines are parallel within tolerance.
    pub fn is_parallel(&self, other: &LineNum) -> bool {
        (self.a * other.b - self.b * other.a).abs() < ATOM
    }

    /// Whether the two lines are perpendicular within tolerance.
    pub fn is_perp(&self, other: &LineNum) -> bool {
        (self.a * other.a + self.b * other.b).abs() < ATOM
    }

    /// Whether the two lines coincide within tolerance.
    pub fn is_same(&self, other: &LineNum) -> bool {
        let (a, b, c) = self.coefficients();
        let (x, y, z) = other.coefficients();
        close_enough(a * y, b * x) && close_enough(b * z, c * y) && close_enough(a * z, c * x)
    }

    /// Whether the point lies on the line within the predicate tolerance.
    pub fn contains(&self, p: &PointNum) -> bool {
        close_enough(self.distance(p), 0.0)
    }

    /// The direction of the line in units of pi, normalized into `[0, 1)`.
    ///
    /// This value anchors angle-table equations: two lines are parallel iff
    /// their directions differ by an integer, perpendicular iff they differ
    /// by an odd multiple of 1/2.
    pub fn direction_turns(&self) -> f64 {
        // Direction vector of a·x + b·y + c = 0 is (b, -a).
        let angle = (-self.a).atan2(self.b);
        let turns = angle / std::f64::consts::PI;
        turns.rem_euclid(1.0)
    }
}
