//! Numeric sketching helpers: random sampling and constraint-object
//! reduction for the construction definitions. Every failure here is
//! recoverable; the builder resamples the whole diagram.

use thales_core::RngHandle;
use thales_num::{
    circle_circle_intersection, line_circle_intersection, line_line_intersection, CircleNum,
    LineNum, PointNum,
};

/// Minimum separation kept between sampled points, so numeric predicate
/// checks stay far away from their tolerances.
pub(crate) const MIN_SEPARATION: f64 = 0.1;

const SAMPLE_RETRIES: usize = 32;

/// A one-dimensional constraint pinning a new point.
#[derive(Debug, Clone)]
pub(crate) enum Constraint {
    /// The point lies on a line.
    OnLine(LineNum),
    /// The point lies on a circle.
    OnCircle(CircleNum),
}

/// Samples a fresh point in the unit-ish box, away from existing points.
pub(crate) fn sample_free(rng: &mut RngHandle, existing: &[PointNum]) -> Option<PointNum> {
    for _ in 0..SAMPLE_RETRIES {
        let p = PointNum::new(rng.uniform(-1.0, 1.0), rng.uniform(-1.0, 1.0));
        if well_separated(&p, existing) {
            return Some(p);
        }
    }
    None
}

/// Samples a non-degenerate triangle: pairwise separation and a healthy
/// margin away from collinearity.
pub(crate) fn sample_triangle(rng: &mut RngHandle) -> Option<[PointNum; 3]> {
    for _ in 0..SAMPLE_RETRIES {
        let a = PointNum::new(rng.uniform(-1.0, 1.0), rng.uniform(-1.0, 1.0));
        let b = PointNum::new(rng.uniform(-1.0, 1.0), rng.uniform(-1.0, 1.0));
        let c = PointNum::new(rng.uniform(-1.0, 1.0), rng.uniform(-1.0, 1.0));
        let area2 = (b - a).cross(&(c - a)).abs();
        if a.distance(&b) > 3.0 * MIN_SEPARATION
            && b.distance(&c) > 3.0 * MIN_SEPARATION
            && c.distance(&a) > 3.0 * MIN_SEPARATION
            && area2 > 0.2
        {
            return Some([a, b, c]);
        }
    }
    None
}

/// Reduces the constraint objects of one clause point to coordinates:
/// two constraints intersect, a single one is sampled within reach of the
/// existing diagram.
pub(crate) fn reduce(
    constraints: &[Constraint],
    existing: &[PointNum],
    rng: &mut RngHandle,
) -> Option<PointNum> {
    match constraints {
        [single] => sample_on(single, existing, rng),
        [first, second] => {
            let (p, q) = intersect(first, second)?;
            let candidates = match q {
                Some(q) => pick_root(p, q, existing, rng),
                None => well_separated(&p, existing).then_some(p),
            };
            candidates
        }
        _ => None,
    }
}

fn intersect(a: &Constraint, b: &Constraint) -> Option<(PointNum, Option<PointNum>)> {
    match (a, b) {
        (Constraint::OnLine(l1), Constraint::OnLine(l2)) => {
            Some((line_line_intersection(l1, l2).ok()?, None))
        }
        (Constraint::OnLine(line), Constraint::OnCircle(circle))
        | (Constraint::OnCircle(circle), Constraint::OnLine(line)) => {
            let (p, q) = line_circle_intersection(line, circle).ok()?;
            Some((p, Some(q)))
        }
        (Constraint::OnCircle(c1), Constraint::OnCircle(c2)) => {
            let (p, q) = circle_circle_intersection(c1, c2).ok()?;
            Some((p, Some(q)))
        }
    }
}

fn pick_root(
    p: PointNum,
    q: PointNum,
    existing: &[PointNum],
    rng: &mut RngHandle,
) -> Option<PointNum> {
    let p_ok = well_separated(&p, existing);
    let q_ok = well_separated(&q, existing);
    match (p_ok, q_ok) {
        (true, false) => Some(p),
        (false, true) => Some(q),
        (true, true) => Some(if rng.uniform(0.0, 1.0) < 0.5 { p } else { q }),
        (false, false) => None,
    }
}

fn sample_on(
    constraint: &Constraint,
    existing: &[PointNum],
    rng: &mut RngHandle,
) -> Option<PointNum> {
    for _ in 0..SAMPLE_RETRIES {
        let candidate = match constraint {
            Constraint::OnLine(line) => {
                let (a, b, _) = line.coefficients();
                let norm = (a * a + b * b).sqrt();
                let direction = PointNum::new(b / norm, -a / norm);
                let base = PointNum::new(0.0, 0.0).foot(line);
                base + direction * rng.uniform(-1.5, 1.5)
            }
            Constraint::OnCircle(circle) => {
                let angle = rng.uniform(0.0, 2.0 * std::f64::consts::PI);
                circle.center + PointNum::new(angle.cos(), angle.sin()) * circle.radius
            }
        };
        if well_separated(&candidate, existing) {
            return Some(candidate);
        }
    }
    None
}

fn well_separated(p: &PointNum, existing: &[PointNum]) -> bool {
    existing.iter().all(|q| p.distance(q) > MIN_SEPARATION)
}

/// Incenter of the triangle ABC.
pub(crate) fn incenter(a: &PointNum, b: &PointNum, c: &PointNum) -> Option<PointNum> {
    let la = b.distance(c);
    let lb = c.distance(a);
    let lc = a.distance(b);
    let total = la + lb + lc;
    if total < MIN_SEPARATION {
        return None;
    }
    Some((*a * la + *b * lb + *c * lc) / total)
}

/// Excenter of the triangle ABC opposite the vertex A.
pub(crate) fn excenter(a: &PointNum, b: &PointNum, c: &PointNum) -> Option<PointNum> {
    let la = b.distance(c);
    let lb = c.distance(a);
    let lc = a.distance(b);
    let total = -la + lb + lc;
    if total.abs() < MIN_SEPARATION {
        return None;
    }
    Some((*a * -la + *b * lb + *c * lc) / total)
}

/// Orthocenter of the triangle ABC.
pub(crate) fn orthocenter(a: &PointNum, b: &PointNum, c: &PointNum) -> Option<PointNum> {
    let alt_a = LineNum::through(b, c).perpendicular_line(a);
    let alt_b = LineNum::through(c, a).perpendicular_line(b);
    line_line_intersection(&alt_a, &alt_b).ok()
}

/// Circumcenter of the triangle ABC.
pub(crate) fn circumcenter(a: &PointNum, b: &PointNum, c: &PointNum) -> Option<PointNum> {
    CircleNum::through(a, b, c).ok().map(|circle| circle.center)
}

/// Foot of the perpendicular from A onto the line BC.
pub(crate) fn foot(a: &PointNum, b: &PointNum, c: &PointNum) -> PointNum {
    a.foot(&LineNum::through(b, c))
}
