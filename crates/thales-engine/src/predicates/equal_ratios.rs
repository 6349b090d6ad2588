//! `eqratio A B C D E F G H` — the ratio AB:CD equals the ratio EF:GH.

use thales_num::{close_enough, CHECK_TOL};
use tracing::warn;

use super::{ratio_quad_terms, witness_premises};
use crate::algebra::AddOutcome;
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let dist = |i: usize, j: usize| proof.point_num(pts[i]).distance(&proof.point_num(pts[j]));
    let (d1, d2, d3, d4) = (dist(0, 1), dist(2, 3), dist(4, 5), dist(6, 7));
    if d1.min(d2).min(d3).min(d4) < CHECK_TOL {
        return false;
    }
    close_enough(d1.ln() - d2.ln() - d3.ln() + d4.ln(), 0.0)
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    let terms = ratio_quad_terms(pts);
    proof.ratio_table.query_eq(&terms, Frac::zero()).is_some()
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let terms = ratio_quad_terms(pts);
    if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording an equal-ratios fact");
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    let terms = ratio_quad_terms(pts);
    let witnesses = proof.ratio_table.query_eq(&terms, Frac::zero())?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::RatioChase, &premises))
}
