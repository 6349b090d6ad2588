//! `eqangle A B C D E F G H` — the angle between lines AB and CD equals
//! the angle between lines EF and GH (modulo pi).

use thales_num::{LineNum, CHECK_TOL};
use tracing::warn;

use super::{anchor, angle_quad_terms, witness_premises};
use crate::algebra::AddOutcome;
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

/// Distance of a value to the nearest integer.
pub(crate) fn mod_one_distance(value: f64) -> f64 {
    let r = value.rem_euclid(1.0);
    r.min(1.0 - r)
}

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let dir = |i: usize, j: usize| {
        LineNum::through(&proof.point_num(pts[i]), &proof.point_num(pts[j])).direction_turns()
    };
    let residue = dir(0, 1) - dir(2, 3) - dir(4, 5) + dir(6, 7);
    mod_one_distance(residue) < CHECK_TOL
}

pub(crate) fn check(proof: &mut ProofState, pts: &[PointId]) -> bool {
    let (terms, residue) = angle_quad_terms(proof, pts);
    let Some(constant) = anchor(residue, Frac::zero()) else {
        return false;
    };
    proof.angle_table.query_eq(&terms, constant).is_some()
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let (terms, residue) = angle_quad_terms(proof, pts);
    let Some(constant) = anchor(residue, Frac::zero()) else {
        warn!("equal-angles fact disagrees with the diagram; not recorded");
        return;
    };
    if proof.angle_table.add_eq(&terms, constant, dep) == AddOutcome::Overflow {
        warn!("angle table overflow while recording an equal-angles fact");
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    let (terms, residue) = angle_quad_terms(proof, pts);
    let constant = anchor(residue, Frac::zero())?;
    let witnesses = proof.angle_table.query_eq(&terms, constant)?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::AngleChase, &premises))
}
