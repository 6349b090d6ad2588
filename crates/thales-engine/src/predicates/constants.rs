//! Constant-valued predicates: `aconst` (angle between two lines, in
//! units of pi), `lconst` (segment length) and `rconst` (segment ratio).
//! Length and ratio constants decompose over prime variables in the ratio
//! table so independent constants combine exactly.

use thales_num::{close_enough, CHECK_TOL};
use tracing::warn;

use super::equal_angles::mod_one_distance;
use super::{anchor, angle_pair_terms, witness_premises};
use crate::algebra::{AddOutcome, RatioVar};
use crate::dependency::{Dependency, Reason};
use crate::frac::{prime_exponents, Frac};
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn aconst_numerical(proof: &ProofState, pts: &[PointId], value: Frac) -> bool {
    let l1 = thales_num::LineNum::through(&proof.point_num(pts[0]), &proof.point_num(pts[1]));
    let l2 = thales_num::LineNum::through(&proof.point_num(pts[2]), &proof.point_num(pts[3]));
    mod_one_distance(l1.direction_turns() - l2.direction_turns() - value.to_f64()) < CHECK_TOL
}

pub(crate) fn aconst_check(proof: &mut ProofState, pts: &[PointId], value: Frac) -> bool {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let Some(constant) = anchor(residue, value) else {
        return false;
    };
    proof.angle_table.query_eq(&terms, constant).is_some()
}

pub(crate) fn aconst_add(proof: &mut ProofState, pts: &[PointId], value: Frac, dep: &Dependency) {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let Some(constant) = anchor(residue, value) else {
        warn!("constant angle disagrees with the diagram; not recorded");
        return;
    };
    if proof.angle_table.add_eq(&terms, constant, dep) == AddOutcome::Overflow {
        warn!("angle table overflow while recording a constant angle");
    }
}

pub(crate) fn aconst_why(
    proof: &mut ProofState,
    sid: StatementId,
    pts: &[PointId],
    value: Frac,
) -> Option<Dependency> {
    let (terms, residue) = angle_pair_terms(proof, pts);
    let constant = anchor(residue, value)?;
    let witnesses = proof.angle_table.query_eq(&terms, constant)?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::AngleChase, &premises))
}

pub(crate) fn lconst_numerical(proof: &ProofState, pts: &[PointId], value: Frac) -> bool {
    let d = proof.point_num(pts[0]).distance(&proof.point_num(pts[1]));
    close_enough(d, value.to_f64())
}

pub(crate) fn lconst_check(proof: &mut ProofState, pts: &[PointId], value: Frac) -> bool {
    let Some(terms) = lconst_terms(pts, value) else {
        return false;
    };
    proof.ratio_table.query_eq(&terms, Frac::zero()).is_some()
}

pub(crate) fn lconst_add(proof: &mut ProofState, pts: &[PointId], value: Frac, dep: &Dependency) {
    let Some(terms) = lconst_terms(pts, value) else {
        warn!(value = %value, "length constant has no prime decomposition; skipped");
        return;
    };
    if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording a length constant");
    }
}

pub(crate) fn lconst_why(
    proof: &mut ProofState,
    sid: StatementId,
    pts: &[PointId],
    value: Frac,
) -> Option<Dependency> {
    let terms = lconst_terms(pts, value)?;
    let witnesses = proof.ratio_table.query_eq(&terms, Frac::zero())?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::RatioChase, &premises))
}

pub(crate) fn rconst_numerical(proof: &ProofState, pts: &[PointId], value: Frac) -> bool {
    let d1 = proof.point_num(pts[0]).distance(&proof.point_num(pts[1]));
    let d2 = proof.point_num(pts[2]).distance(&proof.point_num(pts[3]));
    if d2 < CHECK_TOL {
        return false;
    }
    close_enough(d1 / d2, value.to_f64())
}

pub(crate) fn rconst_check(proof: &mut ProofState, pts: &[PointId], value: Frac) -> bool {
    let Some(terms) = rconst_terms(pts, value) else {
        return false;
    };
    proof.ratio_table.query_eq(&terms, Frac::zero()).is_some()
}

pub(crate) fn rconst_add(proof: &mut ProofState, pts: &[PointId], value: Frac, dep: &Dependency) {
    let Some(terms) = rconst_terms(pts, value) else {
        warn!(value = %value, "ratio constant has no prime decomposition; skipped");
        return;
    };
    if proof.ratio_table.add_eq(&terms, Frac::zero(), dep) == AddOutcome::Overflow {
        warn!("ratio table overflow while recording a ratio constant");
    }
}

pub(crate) fn rconst_why(
    proof: &mut ProofState,
    sid: StatementId,
    pts: &[PointId],
    value: Frac,
) -> Option<Dependency> {
    let terms = rconst_terms(pts, value)?;
    let witnesses = proof.ratio_table.query_eq(&terms, Frac::zero())?;
    let premises = witness_premises(proof, &witnesses);
    Some(Dependency::mk(sid, Reason::RatioChase, &premises))
}

/// `l(AB) - sum(e_p * log p) = 0` for `value = prod p^e`.
fn lconst_terms(pts: &[PointId], value: Frac) -> Option<Vec<(RatioVar, Frac)>> {
    let mut terms = vec![(RatioVar::seg(pts[0], pts[1]), Frac::one())];
    for (prime, exponent) in prime_exponents(&value)? {
        terms.push((RatioVar::Prime(prime), Frac::from_int(-exponent)));
    }
    Some(terms)
}

/// `l(AB) - l(CD) - sum(e_p * log p) = 0` for `value = prod p^e`.
fn rconst_terms(pts: &[PointId], value: Frac) -> Option<Vec<(RatioVar, Frac)>> {
    let mut terms = vec![
        (RatioVar::seg(pts[0], pts[1]), Frac::one()),
        (RatioVar::seg(pts[2], pts[3]), Frac::one().neg()),
    ];
    for (prime, exponent) in prime_exponents(&value)? {
        terms.push((RatioVar::Prime(prime), Frac::from_int(-exponent)));
    }
    Some(terms)
}
