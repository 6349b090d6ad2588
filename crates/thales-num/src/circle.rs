use serde::{Deserialize, Serialize};

use crate::intersect::{line_line_intersection, IntersectError};
use crate::line::LineNum;
use crate::point::PointNum;

/// Numerical circle stored as center plus radius and squared radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleNum {
    /// Center of the circle.
    pub center: PointNum,
    /// Radius.
    pub radius: f64,
    /// Squared radius, kept to avoid repeated rooting.
    pub r2: f64,
}

impl CircleNum {
    /// Circle from center and radius.
    pub fn new(center: PointNum, radius: f64) -> Self {
        Self {
            center,
            radius,
            r2: radius * radius,
        }
    }

    /// Circumscribed circle through three points.
    ///
    /// Fails with [`IntersectError::InvalidLineIntersect`] when the points
    /// are collinear (the perpendicular bisectors do not meet).
    pub fn through(
        p1: &PointNum,
        p2: &PointNum,
        p3: &PointNum,
    ) -> Result<Self, IntersectError> {
        let l12 = perpendicular_bisector(p1, p2);
        let l23 = perpendicular_bisector(p2, p3);
        let center = line_line_intersection(&l12, &l23)?;
        let radius = center.distance(p1);
        Ok(Self::new(center, radius))
    }

    /// Whether the point lies on the circle within the predicate tolerance.
    pub fn contains(&self, p: &PointNum) -> bool {
        crate::close_enough(self.radius, self.center.distance(p))
    }
}

/// Perpendicular bisector of the segment `p1 p2`.
pub(crate) fn perpendicular_bisector(p1: &PointNum, p2: &PointNum) -> LineNum {
    let midpoint = (*p1 + *p2) * 0.5;
    let normal = midpoint + PointNum::new(p2.y - p1.y, p1.x - p2.x);
    LineNum::through(&midpoint, &normal)
}
