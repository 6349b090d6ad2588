//! `simtri A B C P Q R` — the triangles ABC and PQR are similar under the
//! written correspondence (angles modulo pi, proportional sides).

use thales_num::{close_enough, LineNum, CHECK_TOL};
use tracing::warn;

use super::anchor;
use super::equal_angles::mod_one_distance;
use crate::algebra::{AddOutcome, RatioVar};
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementId};
use crate::symbols::{LineId, PointId, SymbolsGraph};

/// The 12 relabelings that preserve the correspondence (6 simultaneous
/// vertex permutations, each with the triangles optionally swapped) map to
/// one canonical representative: the lexicographically least name tuple.
pub(crate) fn canonicalize(symbols: &SymbolsGraph, args: &[Arg]) -> Option<Vec<Arg>> {
    if args.len() != 6 {
        return None;
    }
    let pts: Vec<PointId> = args
        .iter()
        .map(|arg| match arg {
            Arg::Point(id) => Some(*id),
            Arg::Value(_) => None,
        })
        .collect::<Option<Vec<_>>>()?;
    let (t1, t2) = (&pts[..3], &pts[3..]);
    if distinct3(t1).is_none() || distinct3(t2).is_none() {
        return None;
    }
    if t1 == t2 {
        return None;
    }
    const PERMS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut best: Option<Vec<PointId>> = None;
    for perm in PERMS {
        for swap in [false, true] {
            let (first, second) = if swap { (t2, t1) } else { (t1, t2) };
            let candidate: Vec<PointId> = perm
                .iter()
                .map(|i| first[*i])
                .chain(perm.iter().map(|i| second[*i]))
                .collect();
            let better = match &best {
                None => true,
                Some(best) => name_key(symbols, &candidate) < name_key(symbols, best),
            };
            if better {
                best = Some(candidate);
            }
        }
    }
    best.map(|pts| pts.into_iter().map(Arg::Point).collect())
}

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let dist = |i: usize, j: usize| proof.point_num(pts[i]).distance(&proof.point_num(pts[j]));
    let (ab, bc, ca) = (dist(0, 1), dist(1, 2), dist(2, 0));
    let (pq, qr, rp) = (dist(3, 4), dist(4, 5), dist(5, 3));
    if ab.min(bc).min(ca).min(pq).min(qr).min(rp) < CHECK_TOL {
        return false;
    }
    if !close_enough(ab.ln() - pq.ln(), bc.ln() - qr.ln())
        || !close_enough(ab.ln() - pq.ln(), ca.ln() - rp.ln())
    {
        return false;
    }
    let dir = |i: usize, j: usize| {
        LineNum::through(&proof.point_num(pts[i]), &proof.point_num(pts[j])).direction_turns()
    };
    mod_one_distance(dir(0, 1) - dir(0, 2) - dir(3, 4) + dir(3, 5)) < CHECK_TOL
        && mod_one_distance(dir(1, 0) - dir(1, 2) - dir(4, 3) + dir(4, 5)) < CHECK_TOL
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    corner_terms(proof, pts).iter().all(|(terms, residue)| {
        anchor(*residue, Frac::zero())
            .is_some_and(|constant| proof.angle_table.query_eq(terms, constant).is_some())
    })
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    for (terms, residue) in corner_terms(proof, pts) {
        let Some(constant) = anchor(residue, Frac::zero()) else {
            warn!("similarity angle disagrees with the diagram; not recorded");
            continue;
        };
        if proof.angle_table.add_eq(&terms, constant, dep) == AddOutcome::Overflow {
            warn!("angle table overflow while recording a similarity");
        }
    }
    for terms in side_terms(pts) {
        if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
            warn!("ratio table overflow while recording a similarity");
        }
    }
}

/// A similarity reconstructs from the two corner equal-angle statements
/// (the third corner and the side ratios follow in the tables).
pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    if !check(proof, pts) {
        return None;
    }
    let corner_a = proof.make_statement(
        PredicateKind::EqAngle,
        [pts[0], pts[1], pts[0], pts[2], pts[3], pts[4], pts[3], pts[5]]
            .into_iter()
            .map(Arg::Point)
            .collect(),
    )?;
    let corner_b = proof.make_statement(
        PredicateKind::EqAngle,
        [pts[1], pts[0], pts[1], pts[2], pts[4], pts[3], pts[4], pts[5]]
            .into_iter()
            .map(Arg::Point)
            .collect(),
    )?;
    Some(Dependency::mk(
        sid,
        Reason::Definition("similar triangles"),
        &[corner_a, corner_b],
    ))
}

fn corner_terms(
    proof: &mut ProofState,
    pts: &[PointId],
) -> [(Vec<(LineId, Frac)>, f64); 2] {
    let corner = |proof: &mut ProofState, i: usize, j: usize, k: usize, x: usize, y: usize, z: usize| {
        let l1 = proof.line_of(pts[i], pts[j]);
        let l2 = proof.line_of(pts[i], pts[k]);
        let l3 = proof.line_of(pts[x], pts[y]);
        let l4 = proof.line_of(pts[x], pts[z]);
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
    };
    [
        corner(proof, 0, 1, 2, 3, 4, 5),
        corner(proof, 1, 0, 2, 4, 3, 5),
    ]
}

fn side_terms(pts: &[PointId]) -> [[(RatioVar, Frac); 4]; 2] {
    [
        [
            (RatioVar::seg(pts[0], pts[1]), Frac::one()),
            (RatioVar::seg(pts[3], pts[4]), Frac::one().neg()),
            (RatioVar::seg(pts[1], pts[2]), Frac::one().neg()),
            (RatioVar::seg(pts[4], pts[5]), Frac::one()),
        ],
        [
            (RatioVar::seg(pts[0], pts[1]), Frac::one()),
            (RatioVar::seg(pts[3], pts[4]), Frac::one().neg()),
            (RatioVar::seg(pts[2], pts[0]), Frac::one().neg()),
            (RatioVar::seg(pts[5], pts[3]), Frac::one()),
        ],
    ]
}

fn distinct3(pts: &[PointId]) -> Option<()> {
    (pts[0] != pts[1] && pts[0] != pts[2] && pts[1] != pts[2]).then_some(())
}

fn name_key(symbols: &SymbolsGraph, pts: &[PointId]) -> Vec<String> {
    pts.iter()
        .map(|p| symbols.point(*p).name.clone())
        .collect()
}
