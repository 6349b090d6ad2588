//! Numeric-only predicates used as rule guards: `ncoll`, `npara`,
//! `nperp` and `diff`. Their symbolic truth is their numeric truth; a
//! justification is a `NUMERICAL_CHECK` dependency with no premises.

use thales_num::{close_enough, LineNum};

use crate::dependency::{Dependency, Reason};
use crate::proof::ProofState;
use crate::statement::{StatementData, StatementId};
use crate::symbols::PointId;

pub(crate) fn ncoll_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    // No three of the points may be collinear.
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            for k in (j + 1)..pts.len() {
                let origin = proof.point_num(pts[i]);
                let d1 = proof.point_num(pts[j]) - origin;
                let d2 = proof.point_num(pts[k]) - origin;
                if close_enough(d1.cross(&d2), 0.0) {
                    return false;
                }
            }
        }
    }
    true
}

pub(crate) fn npara_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let l1 = LineNum::through(&proof.point_num(pts[0]), &proof.point_num(pts[1]));
    let l2 = LineNum::through(&proof.point_num(pts[2]), &proof.point_num(pts[3]));
    !l1.is_parallel(&l2)
}

pub(crate) fn nperp_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let l1 = LineNum::through(&proof.point_num(pts[0]), &proof.point_num(pts[1]));
    let l2 = LineNum::through(&proof.point_num(pts[2]), &proof.point_num(pts[3]));
    !l1.is_perp(&l2)
}

pub(crate) fn diff_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    !proof.point_num(pts[0]).close(&proof.point_num(pts[1]))
}

pub(crate) fn why(
    proof: &mut ProofState,
    sid: StatementId,
    data: &StatementData,
) -> Option<Dependency> {
    if proof.check_numerical_data(data) {
        Some(Dependency::mk(sid, Reason::NumericalCheck, &[]))
    } else {
        None
    }
}
