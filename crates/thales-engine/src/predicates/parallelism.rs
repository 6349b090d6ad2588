//! `para A B C D` — the lines AB and CD are parallel.

use thales_num::LineNum;
use tracing::warn;

use super::{anchor, angle_pair_terms, witness_premises};
use crate::algebra::AddOutcome;
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let l1 = LineNum::through(&proof.point_num(pts[0]), &proof.point_num(pts[1]));
    let l2 = LineNum::through(&proof.point_num(pts[2]), &proof.point_num(pts[3]));
    l1.is_parallel(&l2)
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let Some(constant) = anchor(residue, Frac::zero()) else {
        return false;
    };
    proof.angle_table.query_eq(&terms, constant).is_some()
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let Some(constant) = anchor(residue, Frac::zero()) else {
        warn!("parallel fact disagrees with the diagram; not recorded");
        return;
    };
    if proof.angle_table.add_eq(&terms, constant, dep) == AddOutcome::Overflow {
        warn!("angle table overflow while recording a parallel fact");
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let constant = anchor(residue, Frac::zero())?;
    let witnesses = proof.angle_table.query_eq(&terms, constant)?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::AngleChase, &premises))
}
