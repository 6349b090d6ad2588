use thiserror::Error;

use crate::circle::CircleNum;
use crate::line::LineNum;
use crate::point::PointNum;
use crate::ATOM;

/// Recoverable failure kinds of the intersection solvers.
///
/// Callers (construction sketching, matcher numeric checks) match on the
/// kind and either try another pairing or give up on that candidate; these
/// never propagate past the predicate layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntersectError {
    /// The lines are parallel or identical within tolerance.
    #[error("lines do not intersect in a single point")]
    InvalidLineIntersect,
    /// The quadratic has no real root beyond tolerance.
    #[error("quadratic has no real solution")]
    InvalidQuadSolve,
}

/// Solves `a·x² + b·x + c = 0`, returning both roots.
pub fn solve_quad(a: f64, b: f64, c: f64) -> Result<(f64, f64), IntersectError> {
    let a = 2.0 * a;
    let d = b * b - 2.0 * a * c;
    if d < 0.0 {
        return Err(IntersectError::InvalidQuadSolve);
    }
    let y = d.sqrt();
    Ok(((-b - y) / a, (-b + y) / a))
}

/// Intersection point of two lines.
pub fn line_line_intersection(
    line1: &LineNum,
    line2: &LineNum,
) -> Result<PointNum, IntersectError> {
    let (a1, b1, c1) = line1.coefficients();
    let (a2, b2, c2) = line2.coefficients();
    let d = a1 * b2 - a2 * b1;
    if d.abs() < ATOM {
        return Err(IntersectError::InvalidLineIntersect);
    }
    Ok(PointNum::new(
        (c2 * b1 - c1 * b2) / d,
        (c1 * a2 - c2 * a1) / d,
    ))
}

/// Both intersection points of a line and a circle.
pub fn line_circle_intersection(
    line: &LineNum,
    circle: &CircleNum,
) -> Result<(PointNum, PointNum), IntersectError> {
    let (a, b, c) = line.coefficients();
    let r = circle.radius;
    let (p, q) = (circle.center.x, circle.center.y);

    if b.abs() < ATOM {
        let x = -c / a;
        let x_p = x - p;
        let (y1, y2) = solve_quad(1.0, -2.0 * q, q * q + x_p * x_p - r * r)?;
        return Ok((PointNum::new(x, y1), PointNum::new(x, y2)));
    }

    if a.abs() < ATOM {
        let y = -c / b;
        let y_q = y - q;
        let (x1, x2) = solve_quad(1.0, -2.0 * p, p * p + y_q * y_q - r * r)?;
        return Ok((PointNum::new(x1, y), PointNum::new(x2, y)));
    }

    let c_ap = c + a * p;
    let a2 = a * a;
    let (y1, y2) = solve_quad(
        a2 + b * b,
        2.0 * (b * c_ap - a2 * q),
        c_ap * c_ap + a2 * (q * q - r * r),
    )?;
    Ok((
        PointNum::new(-(b * y1 + c) / a, y1),
        PointNum::new(-(b * y2 + c) / a, y2),
    ))
}

/// Both intersection points of two circles.
pub fn circle_circle_intersection(
    c1: &CircleNum,
    c2: &CircleNum,
) -> Result<(PointNum, PointNum), IntersectError> {
    let (x0, y0, r0) = (c1.center.x, c1.center.y, c1.radius);
    let (x1, y1, r1) = (c2.center.x, c2.center.y, c2.radius);

    let d = ((x1 - x0) * (x1 - x0) + (y1 - y0) * (y1 - y0)).sqrt();
    if d < ATOM {
        return Err(IntersectError::InvalidQuadSolve);
    }

    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let h2 = r0 * r0 - a * a;
    if h2 < 0.0 {
        return Err(IntersectError::InvalidQuadSolve);
    }
    let h = h2.sqrt();
    let x2 = x0 + a * (x1 - x0) / d;
    let y2 = y0 + a * (y1 - y0) / d;
    Ok((
        PointNum::new(x2 + h * (y1 - y0) / d, y2 - h * (x1 - x0) / d),
        PointNum::new(x2 - h * (y1 - y0) / d, y2 + h * (x1 - x0) / d),
    ))
}
