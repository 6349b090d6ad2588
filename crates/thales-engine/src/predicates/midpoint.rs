//! `midp M A B` — M is the midpoint of the segment AB.

use tracing::warn;

use super::coll;
use crate::algebra::{AddOutcome, RatioVar};
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementId};
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let mid = proof.point_num(pts[1]).midpoint(&proof.point_num(pts[2]));
    proof.point_num(pts[0]).distance(&mid) < thales_num::CHECK_TOL
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    if !proof.symbols.check_coll(pts) {
        return false;
    }
    let terms = half_terms(pts);
    proof.ratio_table.query_eq(&terms, Frac::zero()).is_some()
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    coll::add(proof, pts, dep);
    let terms = half_terms(pts);
    if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording a midpoint");
        return;
    }
    // |AB| = 2 |MA|, recorded over the prime variable for 2 so constant
    // length facts interact exactly.
    let double = [
        (RatioVar::seg(pts[1], pts[2]), Frac::one()),
        (RatioVar::seg(pts[0], pts[1]), Frac::one().neg()),
        (RatioVar::Prime(2), Frac::one().neg()),
    ];
    if proof.ratio_table.add_eq(&double, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording a midpoint doubling");
    }
}

/// A midpoint is justified by the collinearity and the equidistance it
/// folds into; both sub-statements resolve through their own predicates.
pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    if !proof.symbols.check_coll(pts) {
        return None;
    }
    let terms = half_terms(pts);
    proof.ratio_table.query_eq(&terms, Frac::zero())?;
    let coll_stmt = proof.make_statement(
        PredicateKind::Coll,
        pts.iter().map(|p| Arg::Point(*p)).collect(),
    )?;
    let cong_stmt = proof.make_statement(
        PredicateKind::Cong,
        vec![
            Arg::Point(pts[0]),
            Arg::Point(pts[1]),
            Arg::Point(pts[0]),
            Arg::Point(pts[2]),
        ],
    )?;
    Some(Dependency::mk(
        sid,
        Reason::Definition("midpoint"),
        &[coll_stmt, cong_stmt],
    ))
}

fn half_terms(pts: &[PointId]) -> [(RatioVar, Frac); 2] {
    [
        (RatioVar::seg(pts[0], pts[1]), Frac::one()),
        (RatioVar::seg(pts[0], pts[2]), Frac::one().neg()),
    ]
}
