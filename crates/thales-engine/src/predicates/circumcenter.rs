//! `circle O A B C` — O is the center of the circle through A, B and C.

use thales_num::close_enough;
use tracing::warn;

use crate::algebra::{AddOutcome, RatioVar};
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementId};
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let center = proof.point_num(pts[0]);
    let r = center.distance(&proof.point_num(pts[1]));
    close_enough(r, center.distance(&proof.point_num(pts[2])))
        && close_enough(r, center.distance(&proof.point_num(pts[3])))
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    radius_terms(pts)
        .iter()
        .all(|terms| proof.ratio_table.query_eq(terms, Frac::zero()).is_some())
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    for terms in radius_terms(pts) {
        if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
            warn!("ratio table overflow while recording a circumcenter");
        }
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    for terms in radius_terms(pts) {
        proof.ratio_table.query_eq(&terms, Frac::zero())?;
    }
    let cong = |proof: &mut ProofState, other: PointId| {
        proof.make_statement(
            PredicateKind::Cong,
            vec![
                Arg::Point(pts[0]),
                Arg::Point(pts[1]),
                Arg::Point(pts[0]),
                Arg::Point(other),
            ],
        )
    };
    let first = cong(proof, pts[2])?;
    let second = cong(proof, pts[3])?;
    Some(Dependency::mk(
        sid,
        Reason::Definition("circumcenter"),
        &[first, second],
    ))
}

fn radius_terms(pts: &[PointId]) -> [[(RatioVar, Frac); 2]; 2] {
    [
        [
            (RatioVar::seg(pts[0], pts[1]), Frac::one()),
            (RatioVar::seg(pts[0], pts[2]), Frac::one().neg()),
        ],
        [
            (RatioVar::seg(pts[0], pts[1]), Frac::one()),
            (RatioVar::seg(pts[0], pts[3]), Frac::one().neg()),
        ],
    ]
}
