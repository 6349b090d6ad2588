//! `cong A B C D` — the segments AB and CD have equal length.

use thales_num::close_enough;
use tracing::warn;

use super::{ratio_pair_terms, witness_premises};
use crate::algebra::AddOutcome;
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let d1 = proof.point_num(pts[0]).distance(&proof.point_num(pts[1]));
    let d2 = proof.point_num(pts[2]).distance(&proof.point_num(pts[3]));
    close_enough(d1, d2)
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    let terms = ratio_pair_terms(pts);
    proof.ratio_table.query_eq(&terms, Frac::zero()).is_some()
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let terms = ratio_pair_terms(pts);
    if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording a congruence");
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    let terms = ratio_pair_terms(pts);
    let witnesses = proof.ratio_table.query_eq(&terms, Frac::zero())?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::RatioChase, &premises))
}
