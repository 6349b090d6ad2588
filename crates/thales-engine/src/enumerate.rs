//! Statement enumerators: every tuple they produce checks both
//! symbolically and numerically, which the test suite uses to audit
//! engine soundness on whole diagrams.

use std::collections::BTreeMap;

use crate::algebra::{Combo, RatioVar};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementId};
use crate::symbols::{LineId, PointId};

/// Collinear tuples: the point set of every line carrying three or more
/// points.
pub fn all_colls(proof: &mut ProofState) -> Vec<StatementId> {
    let mut out = Vec::new();
    for line in proof.symbols.line_roots() {
        let points: Vec<PointId> = proof.symbols.line(line).points.iter().copied().collect();
        if points.len() < 3 {
            continue;
        }
        if let Some(sid) =
            proof.make_statement(PredicateKind::Coll, points.into_iter().map(Arg::Point).collect())
        {
            out.push(sid);
        }
    }
    sort_by_repr(proof, &mut out);
    out
}

/// Concyclic tuples: the point set of every circle carrying four or more
/// points.
pub fn all_cyclics(proof: &mut ProofState) -> Vec<StatementId> {
    let mut out = Vec::new();
    for circle in proof.symbols.circle_roots() {
        let points: Vec<PointId> = proof.symbols.circle(circle).points.iter().copied().collect();
        if points.len() < 4 {
            continue;
        }
        if let Some(sid) = proof.make_statement(
            PredicateKind::Cyclic,
            points.into_iter().map(Arg::Point).collect(),
        ) {
            out.push(sid);
        }
    }
    sort_by_repr(proof, &mut out);
    out
}

/// Parallel line pairs derived by the angle table.
pub fn all_paras(proof: &mut ProofState) -> Vec<StatementId> {
    line_pair_relations(proof, PredicateKind::Para)
}

/// Perpendicular line pairs derived by the angle table.
pub fn all_perps(proof: &mut ProofState) -> Vec<StatementId> {
    line_pair_relations(proof, PredicateKind::Perp)
}

/// Congruent segment pairs derived by the ratio table.
pub fn all_congs(proof: &mut ProofState) -> Vec<StatementId> {
    let segments = all_segments(proof);
    let mut out = Vec::new();
    for (i, s1) in segments.iter().enumerate() {
        for s2 in segments.iter().skip(i + 1) {
            let args = vec![
                Arg::Point(s1.0),
                Arg::Point(s1.1),
                Arg::Point(s2.0),
                Arg::Point(s2.1),
            ];
            if let Some(sid) = proof.make_statement(PredicateKind::Cong, args) {
                if proof.check(sid) {
                    out.push(sid);
                }
            }
        }
    }
    sort_by_repr(proof, &mut out);
    out
}

/// Equal-angle quadruples derived by the angle table: line pairs are
/// grouped by their reduced combination, so only pairs whose difference
/// the table can settle are compared.
pub fn all_eqangles(proof: &mut ProofState) -> Vec<StatementId> {
    let lines = lines_with_points(proof);
    let mut groups: BTreeMap<Combo<LineId>, Vec<(usize, usize, Frac)>> = BTreeMap::new();
    for (i, (l1, _)) in lines.iter().enumerate() {
        for (j, (l2, _)) in lines.iter().enumerate() {
            if i == j {
                continue;
            }
            let terms = [(*l1, Frac::one()), (*l2, Frac::one().neg())];
            let Some((combo, constant, _)) = proof.angle_table.reduce(&terms, Frac::zero()) else {
                continue;
            };
            groups.entry(combo).or_default().push((i, j, constant));
        }
    }
    let mut out = Vec::new();
    for members in groups.values() {
        for (a, pair1) in members.iter().enumerate() {
            for pair2 in members.iter().skip(a + 1) {
                if pair1.0 == pair2.0 || pair1.1 == pair2.1 {
                    continue;
                }
                let args: Vec<Arg> = [
                    lines[pair1.0].1,
                    lines[pair1.1].1,
                    lines[pair2.0].1,
                    lines[pair2.1].1,
                ]
                .iter()
                .flat_map(|(p, q)| [Arg::Point(*p), Arg::Point(*q)])
                .collect();
                if let Some(sid) = proof.make_statement(PredicateKind::EqAngle, args) {
                    if proof.check(sid) {
                        out.push(sid);
                    }
                }
            }
        }
    }
    out.sort();
    out.dedup();
    sort_by_repr(proof, &mut out);
    out
}

/// Equal-ratio quadruples derived by the ratio table, grouped the same
/// way as the angle enumeration.
pub fn all_eqratios(proof: &mut ProofState) -> Vec<StatementId> {
    let segments = all_segments(proof);
    let mut groups: BTreeMap<Combo<RatioVar>, Vec<(usize, usize, Frac)>> = BTreeMap::new();
    for (i, s1) in segments.iter().enumerate() {
        for (j, s2) in segments.iter().enumerate() {
            if i == j {
                continue;
            }
            let terms = [
                (RatioVar::seg(s1.0, s1.1), Frac::one()),
                (RatioVar::seg(s2.0, s2.1), Frac::one().neg()),
            ];
            let Some((combo, constant, _)) = proof.ratio_table.reduce(&terms, Frac::zero()) else {
                continue;
            };
            groups.entry(combo).or_default().push((i, j, constant));
        }
    }
    let mut out = Vec::new();
    for members in groups.values() {
        for (a, pair1) in members.iter().enumerate() {
            for pair2 in members.iter().skip(a + 1) {
                if pair1.2 != pair2.2 || pair1.0 == pair2.0 || pair1.1 == pair2.1 {
                    continue;
                }
                let (s1, s2) = (segments[pair1.0], segments[pair1.1]);
                let (s3, s4) = (segments[pair2.0], segments[pair2.1]);
                let args = vec![
                    Arg::Point(s1.0),
                    Arg::Point(s1.1),
                    Arg::Point(s2.0),
                    Arg::Point(s2.1),
                    Arg::Point(s3.0),
                    Arg::Point(s3.1),
                    Arg::Point(s4.0),
                    Arg::Point(s4.1),
                ];
                if let Some(sid) = proof.make_statement(PredicateKind::EqRatio, args) {
                    if proof.check(sid) {
                        out.push(sid);
                    }
                }
            }
        }
    }
    out.sort();
    out.dedup();
    sort_by_repr(proof, &mut out);
    out
}

/// Known midpoint statements.
pub fn all_midps(proof: &ProofState) -> Vec<StatementId> {
    known_of_kind(proof, PredicateKind::Midp)
}

/// Known circumcenter statements.
pub fn all_circles(proof: &ProofState) -> Vec<StatementId> {
    known_of_kind(proof, PredicateKind::Circle)
}

fn known_of_kind(proof: &ProofState, kind: PredicateKind) -> Vec<StatementId> {
    proof
        .hypergraph
        .statements()
        .filter(|sid| proof.data(*sid).kind == kind)
        .collect()
}

/// Line representatives paired with two of their points (lowest names),
/// the anchor arguments used to express line relations as statements.
fn lines_with_points(proof: &mut ProofState) -> Vec<(LineId, (PointId, PointId))> {
    let mut out = Vec::new();
    for line in proof.symbols.line_roots() {
        let mut points: Vec<PointId> = proof.symbols.line(line).points.iter().copied().collect();
        proof.symbols.sort_by_name(&mut points);
        if points.len() >= 2 {
            out.push((line, (points[0], points[1])));
        }
    }
    out
}

fn line_pair_relations(proof: &mut ProofState, kind: PredicateKind) -> Vec<StatementId> {
    let lines = lines_with_points(proof);
    let mut out = Vec::new();
    for (i, (_, p1)) in lines.iter().enumerate() {
        for (_, p2) in lines.iter().skip(i + 1) {
            let args = vec![
                Arg::Point(p1.0),
                Arg::Point(p1.1),
                Arg::Point(p2.0),
                Arg::Point(p2.1),
            ];
            if let Some(sid) = proof.make_statement(kind, args) {
                if proof.check(sid) {
                    out.push(sid);
                }
            }
        }
    }
    sort_by_repr(proof, &mut out);
    out
}

fn all_segments(proof: &ProofState) -> Vec<(PointId, PointId)> {
    let ids = proof.symbols.point_ids();
    let mut out = Vec::new();
    for (i, a) in ids.iter().enumerate() {
        for b in ids.iter().skip(i + 1) {
            out.push((*a, *b));
        }
    }
    out
}

fn sort_by_repr(proof: &ProofState, out: &mut [StatementId]) {
    out.sort_by_key(|sid| proof.repr(*sid));
}
