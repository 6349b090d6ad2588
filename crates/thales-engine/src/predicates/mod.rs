//! The predicate registry: a closed tagged set. Every predicate defines
//! argument canonicalization, a numeric check against the diagram, a
//! symbolic check against the engine state, a symbolic add, and a premise
//! reconstruction; this module is the dispatch table keyed on the tag.

mod circumcenter;
mod coll;
mod congruence;
mod constants;
mod cyclic;
mod equal_angles;
mod equal_ratios;
mod filters;
mod midpoint;
mod parallelism;
mod perpendicularity;
mod pythagoras;
mod triangles;

use std::collections::BTreeSet;

use crate::algebra::RatioVar;
use crate::dependency::Dependency;
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementData, StatementId};
use crate::symbols::{LineId, PointId, SymbolsGraph};

/// Canonicalizes raw arguments for a predicate; `None` marks a
/// structurally illegal use, which produces no statement.
pub(crate) fn canonicalize(
    symbols: &SymbolsGraph,
    kind: PredicateKind,
    args: Vec<Arg>,
) -> Option<Vec<Arg>> {
    let by_name = |a: &Arg, b: &Arg| {
        symbols
            .point(a.point())
            .name
            .cmp(&symbols.point(b.point()).name)
    };
    match kind {
        PredicateKind::Coll | PredicateKind::Ncoll => {
            let mut points = all_points(&args, 3, usize::MAX)?;
            distinct(&points)?;
            points.sort_by(|a, b| by_name(&Arg::Point(*a), &Arg::Point(*b)));
            Some(points.into_iter().map(Arg::Point).collect())
        }
        PredicateKind::Cyclic => {
            let mut points = all_points(&args, 4, usize::MAX)?;
            distinct(&points)?;
            points.sort_by(|a, b| by_name(&Arg::Point(*a), &Arg::Point(*b)));
            Some(points.into_iter().map(Arg::Point).collect())
        }
        PredicateKind::Diff => {
            let mut points = all_points(&args, 2, 2)?;
            distinct(&points)?;
            points.sort_by(|a, b| by_name(&Arg::Point(*a), &Arg::Point(*b)));
            Some(points.into_iter().map(Arg::Point).collect())
        }
        PredicateKind::Para
        | PredicateKind::Perp
        | PredicateKind::Npara
        | PredicateKind::Nperp
        | PredicateKind::Cong => {
            let points = all_points(&args, 4, 4)?;
            let p1 = sorted_pair(symbols, points[0], points[1])?;
            let p2 = sorted_pair(symbols, points[2], points[3])?;
            if p1 == p2 {
                return None;
            }
            let (p1, p2) = order_pairs(symbols, p1, p2);
            Some(flatten_pairs(&[p1, p2]))
        }
        PredicateKind::EqAngle | PredicateKind::EqRatio => {
            let points = all_points(&args, 8, 8)?;
            let l1 = sorted_pair(symbols, points[0], points[1])?;
            let l2 = sorted_pair(symbols, points[2], points[3])?;
            let l3 = sorted_pair(symbols, points[4], points[5])?;
            let l4 = sorted_pair(symbols, points[6], points[7])?;
            if l1 == l2 || l3 == l4 {
                return None;
            }
            // The statement encodes +l1 -l2 -l3 +l4 = 0 (directions or log
            // lengths); the canonical form orders within the plus and minus
            // sets, then puts the lexicographically smaller set in the plus
            // slots (negating the relation preserves it).
            let mut plus = [l1, l4];
            let mut minus = [l2, l3];
            sort_pair_slice(symbols, &mut plus);
            sort_pair_slice(symbols, &mut minus);
            if plus == minus {
                // The relation cancels to 0 = 0 and carries no content.
                return None;
            }
            if pair_key(symbols, &minus[0]) < pair_key(symbols, &plus[0])
                || (minus[0] == plus[0]
                    && pair_key(symbols, &minus[1]) < pair_key(symbols, &plus[1]))
            {
                std::mem::swap(&mut plus, &mut minus);
            }
            // Slots 1/2 and 3/4 each pair one plus with one minus line;
            // when a line occurs on both sides, emit the minus pair in the
            // order that keeps both slot pairs distinct.
            let minus = if plus[0] == minus[0] || plus[1] == minus[1] {
                [minus[1], minus[0]]
            } else {
                minus
            };
            Some(flatten_pairs(&[plus[0], minus[0], minus[1], plus[1]]))
        }
        PredicateKind::Midp => {
            let points = all_points(&args, 3, 3)?;
            distinct(&points)?;
            let pair = sorted_pair(symbols, points[1], points[2])?;
            Some(vec![
                Arg::Point(points[0]),
                Arg::Point(pair.0),
                Arg::Point(pair.1),
            ])
        }
        PredicateKind::Circle => {
            let mut points = all_points(&args, 4, 4)?;
            distinct(&points)?;
            let center = points.remove(0);
            points.sort_by(|a, b| by_name(&Arg::Point(*a), &Arg::Point(*b)));
            let mut out = vec![Arg::Point(center)];
            out.extend(points.into_iter().map(Arg::Point));
            Some(out)
        }
        PredicateKind::Simtri => triangles::canonicalize(symbols, &args),
        PredicateKind::AConst => {
            let (points, value) = points_and_value(&args, 4)?;
            let p1 = sorted_pair(symbols, points[0], points[1])?;
            let p2 = sorted_pair(symbols, points[2], points[3])?;
            if p1 == p2 {
                return None;
            }
            let (first, second, value) = if pair_key(symbols, &p2) < pair_key(symbols, &p1) {
                (p2, p1, value.neg().rem_one())
            } else {
                (p1, p2, value.rem_one())
            };
            let mut out = flatten_pairs(&[first, second]);
            out.push(Arg::Value(value));
            Some(out)
        }
        PredicateKind::LConst => {
            let (points, value) = points_and_value(&args, 2)?;
            if value <= Frac::zero() {
                return None;
            }
            let pair = sorted_pair(symbols, points[0], points[1])?;
            Some(vec![
                Arg::Point(pair.0),
                Arg::Point(pair.1),
                Arg::Value(value),
            ])
        }
        PredicateKind::RConst => {
            let (points, value) = points_and_value(&args, 4)?;
            if value <= Frac::zero() {
                return None;
            }
            let p1 = sorted_pair(symbols, points[0], points[1])?;
            let p2 = sorted_pair(symbols, points[2], points[3])?;
            if p1 == p2 {
                return None;
            }
            let (first, second, value) = if pair_key(symbols, &p2) < pair_key(symbols, &p1) {
                (p2, p1, value.recip()?)
            } else {
                (p1, p2, value)
            };
            let mut out = flatten_pairs(&[first, second]);
            out.push(Arg::Value(value));
            Some(out)
        }
        PredicateKind::PythagoreanPremises | PredicateKind::PythagoreanConclusions => {
            let points = all_points(&args, 3, 3)?;
            distinct(&points)?;
            let legs = sorted_pair(symbols, points[1], points[2])?;
            Some(vec![
                Arg::Point(points[0]),
                Arg::Point(legs.0),
                Arg::Point(legs.1),
            ])
        }
    }
}

/// Ground-truth check of canonical statement data against the diagram.
pub(crate) fn check_numerical(proof: &ProofState, data: &StatementData) -> bool {
    let pts = statement_points(data);
    match data.kind {
        PredicateKind::Coll => coll::check_numerical(proof, &pts),
        PredicateKind::Ncoll => filters::ncoll_numerical(proof, &pts),
        PredicateKind::Cyclic => cyclic::check_numerical(proof, &pts),
        PredicateKind::Diff => filters::diff_numerical(proof, &pts),
        PredicateKind::Para => parallelism::check_numerical(proof, &pts),
        PredicateKind::Npara => filters::npara_numerical(proof, &pts),
        PredicateKind::Perp => perpendicularity::check_numerical(proof, &pts),
        PredicateKind::Nperp => filters::nperp_numerical(proof, &pts),
        PredicateKind::Cong => congruence::check_numerical(proof, &pts),
        PredicateKind::EqAngle => equal_angles::check_numerical(proof, &pts),
        PredicateKind::EqRatio => equal_ratios::check_numerical(proof, &pts),
        PredicateKind::Midp => midpoint::check_numerical(proof, &pts),
        PredicateKind::Circle => circumcenter::check_numerical(proof, &pts),
        PredicateKind::Simtri => triangles::check_numerical(proof, &pts),
        PredicateKind::AConst => constants::aconst_numerical(proof, &pts, statement_value(data)),
        PredicateKind::LConst => constants::lconst_numerical(proof, &pts, statement_value(data)),
        PredicateKind::RConst => constants::rconst_numerical(proof, &pts, statement_value(data)),
        PredicateKind::PythagoreanPremises | PredicateKind::PythagoreanConclusions => {
            pythagoras::check_numerical(proof, &pts)
        }
    }
}

/// Symbolic check against the symbol graph and the algebraic tables.
pub(crate) fn check(proof: &mut ProofState, sid: StatementId) -> bool {
    let data = proof.data(sid).clone();
    let pts = statement_points(&data);
    match data.kind {
        PredicateKind::Coll => proof.symbols.check_coll(&pts),
        PredicateKind::Cyclic => proof.symbols.check_cyclic(&pts),
        PredicateKind::Para => parallelism::check(proof, &pts),
        PredicateKind::Perp => perpendicularity::check(proof, &pts),
        PredicateKind::Cong => congruence::check(proof, &pts),
        PredicateKind::EqAngle => equal_angles::check(proof, &pts),
        PredicateKind::EqRatio => equal_ratios::check(proof, &pts),
        PredicateKind::Midp => midpoint::check(proof, &pts),
        PredicateKind::Circle => circumcenter::check(proof, &pts),
        PredicateKind::Simtri => triangles::check(proof, &pts),
        PredicateKind::AConst => constants::aconst_check(proof, &pts, statement_value(&data)),
        PredicateKind::LConst => constants::lconst_check(proof, &pts, statement_value(&data)),
        PredicateKind::RConst => constants::rconst_check(proof, &pts, statement_value(&data)),
        // Numeric filters are true whenever the diagram says so; `check`
        // is only reached after the numeric gate passed.
        PredicateKind::Ncoll
        | PredicateKind::Npara
        | PredicateKind::Nperp
        | PredicateKind::Diff => true,
        PredicateKind::PythagoreanPremises | PredicateKind::PythagoreanConclusions => {
            pythagoras::check(proof, sid)
        }
    }
}

/// Records a dependency: hypergraph edge plus the predicate's structural
/// update of the symbol graph or the algebraic tables. Returns whether the
/// edge is new.
pub(crate) fn add(proof: &mut ProofState, dep: &Dependency) -> bool {
    let is_new = proof.hypergraph.add_edge(dep.clone());
    let data = proof.data(dep.statement).clone();
    let pts = statement_points(&data);
    match data.kind {
        PredicateKind::Coll => coll::add(proof, &pts, dep),
        PredicateKind::Cyclic => cyclic::add(proof, &pts, dep),
        PredicateKind::Para => parallelism::add(proof, &pts, dep),
        PredicateKind::Perp => perpendicularity::add(proof, &pts, dep),
        PredicateKind::Cong => congruence::add(proof, &pts, dep),
        PredicateKind::EqAngle => equal_angles::add(proof, &pts, dep),
        PredicateKind::EqRatio => equal_ratios::add(proof, &pts, dep),
        PredicateKind::Midp => midpoint::add(proof, &pts, dep),
        PredicateKind::Circle => circumcenter::add(proof, &pts, dep),
        PredicateKind::Simtri => triangles::add(proof, &pts, dep),
        PredicateKind::AConst => constants::aconst_add(proof, &pts, statement_value(&data), dep),
        PredicateKind::LConst => constants::lconst_add(proof, &pts, statement_value(&data), dep),
        PredicateKind::RConst => constants::rconst_add(proof, &pts, statement_value(&data), dep),
        PredicateKind::Ncoll
        | PredicateKind::Npara
        | PredicateKind::Nperp
        | PredicateKind::Diff => {}
        PredicateKind::PythagoreanPremises => {}
        PredicateKind::PythagoreanConclusions => pythagoras::add_conclusions(proof, &pts, dep),
    }
    is_new
}

/// Reconstructs the minimal dependency justifying a statement from the
/// current symbolic state; `None` when no justification exists.
pub(crate) fn why(proof: &mut ProofState, sid: StatementId) -> Option<Dependency> {
    let data = proof.data(sid).clone();
    let pts = statement_points(&data);
    match data.kind {
        PredicateKind::Coll => coll::why(proof, sid, &pts),
        PredicateKind::Cyclic => cyclic::why(proof, sid, &pts),
        PredicateKind::Para => parallelism::why(proof, sid, &pts),
        PredicateKind::Perp => perpendicularity::why(proof, sid, &pts),
        PredicateKind::Cong => congruence::why(proof, sid, &pts),
        PredicateKind::EqAngle => equal_angles::why(proof, sid, &pts),
        PredicateKind::EqRatio => equal_ratios::why(proof, sid, &pts),
        PredicateKind::Midp => midpoint::why(proof, sid, &pts),
        PredicateKind::Circle => circumcenter::why(proof, sid, &pts),
        PredicateKind::Simtri => triangles::why(proof, sid, &pts),
        PredicateKind::AConst => constants::aconst_why(proof, sid, &pts, statement_value(&data)),
        PredicateKind::LConst => constants::lconst_why(proof, sid, &pts, statement_value(&data)),
        PredicateKind::RConst => constants::rconst_why(proof, sid, &pts, statement_value(&data)),
        PredicateKind::Ncoll
        | PredicateKind::Npara
        | PredicateKind::Nperp
        | PredicateKind::Diff => filters::why(proof, sid, &data),
        PredicateKind::PythagoreanPremises => pythagoras::why_premises(proof, sid, &pts),
        PredicateKind::PythagoreanConclusions => None,
    }
}

/// Human-readable rendering of a statement.
pub(crate) fn pretty(proof: &ProofState, sid: StatementId) -> String {
    let data = proof.data(sid);
    let name = |id: PointId| proof.symbols.point(id).name.clone();
    let seg = |a: PointId, b: PointId| format!("{}{}", name(a), name(b));
    let pts = statement_points(data);
    match data.kind {
        PredicateKind::Coll => format!(
            "{} are collinear",
            pts.iter().map(|p| name(*p)).collect::<Vec<_>>().join(", ")
        ),
        PredicateKind::Cyclic => format!(
            "{} are concyclic",
            pts.iter().map(|p| name(*p)).collect::<Vec<_>>().join(", ")
        ),
        PredicateKind::Para => format!("{} ∥ {}", seg(pts[0], pts[1]), seg(pts[2], pts[3])),
        PredicateKind::Perp => format!("{} ⊥ {}", seg(pts[0], pts[1]), seg(pts[2], pts[3])),
        PredicateKind::Cong => format!("{} = {}", seg(pts[0], pts[1]), seg(pts[2], pts[3])),
        PredicateKind::EqAngle => format!(
            "∠({},{}) = ∠({},{})",
            seg(pts[0], pts[1]),
            seg(pts[2], pts[3]),
            seg(pts[4], pts[5]),
            seg(pts[6], pts[7])
        ),
        PredicateKind::EqRatio => format!(
            "{}:{} = {}:{}",
            seg(pts[0], pts[1]),
            seg(pts[2], pts[3]),
            seg(pts[4], pts[5]),
            seg(pts[6], pts[7])
        ),
        PredicateKind::Midp => format!(
            "{} is the midpoint of {}",
            name(pts[0]),
            seg(pts[1], pts[2])
        ),
        PredicateKind::Circle => format!(
            "{} is the center of the circle through {}, {}, {}",
            name(pts[0]),
            name(pts[1]),
            name(pts[2]),
            name(pts[3])
        ),
        PredicateKind::Simtri => format!(
            "△{}{}{} ~ △{}{}{}",
            name(pts[0]),
            name(pts[1]),
            name(pts[2]),
            name(pts[3]),
            name(pts[4]),
            name(pts[5])
        ),
        PredicateKind::AConst => format!(
            "∠({},{}) = {}π",
            seg(pts[0], pts[1]),
            seg(pts[2], pts[3]),
            statement_value(data)
        ),
        PredicateKind::LConst => {
            format!("|{}| = {}", seg(pts[0], pts[1]), statement_value(data))
        }
        PredicateKind::RConst => format!(
            "{}:{} = {}",
            seg(pts[0], pts[1]),
            seg(pts[2], pts[3]),
            statement_value(data)
        ),
        PredicateKind::Ncoll => format!(
            "{} are not collinear",
            pts.iter().map(|p| name(*p)).collect::<Vec<_>>().join(", ")
        ),
        PredicateKind::Npara => format!("{} ∦ {}", seg(pts[0], pts[1]), seg(pts[2], pts[3])),
        PredicateKind::Nperp => {
            format!("{} not ⊥ {}", seg(pts[0], pts[1]), seg(pts[2], pts[3]))
        }
        PredicateKind::Diff => format!("{} ≠ {}", name(pts[0]), name(pts[1])),
        PredicateKind::PythagoreanPremises => format!(
            "the Pythagorean premises hold on {}, {}, {}",
            name(pts[0]),
            name(pts[1]),
            name(pts[2])
        ),
        PredicateKind::PythagoreanConclusions => format!(
            "the Pythagorean conclusions hold on {}, {}, {}",
            name(pts[0]),
            name(pts[1]),
            name(pts[2])
        ),
    }
}

// --- shared helpers ---------------------------------------------------

/// Point arguments of a canonical statement, in order.
pub(crate) fn statement_points(data: &StatementData) -> Vec<PointId> {
    data.args
        .iter()
        .filter_map(|arg| match arg {
            Arg::Point(id) => Some(*id),
            Arg::Value(_) => None,
        })
        .collect()
}

/// Trailing value argument of a `*const` statement.
pub(crate) fn statement_value(data: &StatementData) -> Frac {
    data.args
        .iter()
        .rev()
        .find_map(|arg| match arg {
            Arg::Value(value) => Some(*value),
            Arg::Point(_) => None,
        })
        .unwrap_or_else(Frac::zero)
}

/// Anchors a floating residue onto `base + k` for the integer `k` nearest
/// to it, verifying the diagram actually sits on that exact value.
pub(crate) fn anchor(residue: f64, base: Frac) -> Option<Frac> {
    let k = (residue - base.to_f64()).round();
    if !k.is_finite() || k.abs() > 1e9 {
        return None;
    }
    let exact = base.checked_add(&Frac::from_int(k as i64))?;
    if (residue - exact.to_f64()).abs() < thales_num::CHECK_TOL {
        Some(exact)
    } else {
        None
    }
}

/// Angle-table terms `+d(l1) -d(l2)` for two lines given by point pairs,
/// together with the floating residue from the diagram.
pub(crate) fn angle_pair_terms(
    proof: &mut ProofState,
    pts: &[PointId],
) -> (Vec<(LineId, Frac)>, f64) {
    let l1 = proof.line_of(pts[0], pts[1]);
    let l2 = proof.line_of(pts[2], pts[3]);
    let residue = proof.line_dir(l1) - proof.line_dir(l2);
    (
        vec![(l1, Frac::one()), (l2, Frac::one().neg())],
        residue,
    )
}

/// Angle-table terms `+d(l1) -d(l2) -d(l3) +d(l4)` for an equal-angles
/// statement, with the floating residue.
pub(crate) fn angle_quad_terms(
    proof: &mut ProofState,
    pts: &[PointId],
) -> (Vec<(LineId, Frac)>, f64) {
    let l1 = proof.line_of(pts[0], pts[1]);
    let l2 = proof.line_of(pts[2], pts[3]);
    let l3 = proof.line_of(pts[4], pts[5]);
    let l4 = proof.line_of(pts[6], pts[7]);
    let residue =
        proof.line_dir(l1) - proof.line_dir(l2) - proof.line_dir(l3) + proof.line_dir(l4);
    (
        vec![
            (l1, Frac::one()),
            (l2, Frac::one().neg()),
            (l3, Frac::one().neg()),
            (l4, Frac::one()),
        ],
        residue,
    )
}

/// Ratio-table terms `+l(s1) -l(s2)` for two segments.
pub(crate) fn ratio_pair_terms(pts: &[PointId]) -> Vec<(RatioVar, Frac)> {
    vec![
        (RatioVar::seg(pts[0], pts[1]), Frac::one()),
        (RatioVar::seg(pts[2], pts[3]), Frac::one().neg()),
    ]
}

/// Ratio-table terms `+l(s1) -l(s2) -l(s3) +l(s4)` for an equal-ratios
/// statement.
pub(crate) fn ratio_quad_terms(pts: &[PointId]) -> Vec<(RatioVar, Frac)> {
    vec![
        (RatioVar::seg(pts[0], pts[1]), Frac::one()),
        (RatioVar::seg(pts[2], pts[3]), Frac::one().neg()),
        (RatioVar::seg(pts[4], pts[5]), Frac::one().neg()),
        (RatioVar::seg(pts[6], pts[7]), Frac::one()),
    ]
}

/// Premise statements behind a witness set, deduplicated and ordered by
/// canonical representation for reproducibility.
pub(crate) fn witness_premises(
    proof: &ProofState,
    witnesses: &BTreeSet<Dependency>,
) -> Vec<StatementId> {
    let mut premises: Vec<StatementId> = witnesses.iter().map(|dep| dep.statement).collect();
    premises.sort_by_key(|sid| proof.repr(*sid));
    premises.dedup();
    premises
}

fn all_points(args: &[Arg], min: usize, max: usize) -> Option<Vec<PointId>> {
    if args.len() < min || args.len() > max {
        return None;
    }
    args.iter()
        .map(|arg| match arg {
            Arg::Point(id) => Some(*id),
            Arg::Value(_) => None,
        })
        .collect()
}

fn points_and_value(args: &[Arg], points: usize) -> Option<(Vec<PointId>, Frac)> {
    if args.len() != points + 1 {
        return None;
    }
    let value = match args[points] {
        Arg::Value(value) => value,
        Arg::Point(_) => return None,
    };
    let points = all_points(&args[..points], points, points)?;
    Some((points, value))
}

fn distinct(points: &[PointId]) -> Option<()> {
    let set: BTreeSet<PointId> = points.iter().copied().collect();
    (set.len() == points.len()).then_some(())
}

/// Sorted point pair; `None` when the points coincide.
pub(crate) fn sorted_pair(
    symbols: &SymbolsGraph,
    a: PointId,
    b: PointId,
) -> Option<(PointId, PointId)> {
    if a == b {
        return None;
    }
    if symbols.point(a).name <= symbols.point(b).name {
        Some((a, b))
    } else {
        Some((b, a))
    }
}

pub(crate) fn pair_key<'g>(
    symbols: &'g SymbolsGraph,
    pair: &(PointId, PointId),
) -> (&'g str, &'g str) {
    (&symbols.point(pair.0).name, &symbols.point(pair.1).name)
}

fn sort_pair_slice(symbols: &SymbolsGraph, pairs: &mut [(PointId, PointId)]) {
    pairs.sort_by(|a, b| pair_key(symbols, a).cmp(&pair_key(symbols, b)));
}

fn order_pairs(
    symbols: &SymbolsGraph,
    p1: (PointId, PointId),
    p2: (PointId, PointId),
) -> ((PointId, PointId), (PointId, PointId)) {
    if pair_key(symbols, &p2) < pair_key(symbols, &p1) {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

fn flatten_pairs(pairs: &[(PointId, PointId)]) -> Vec<Arg> {
    pairs
        .iter()
        .flat_map(|(a, b)| [Arg::Point(*a), Arg::Point(*b)])
        .collect()
}
