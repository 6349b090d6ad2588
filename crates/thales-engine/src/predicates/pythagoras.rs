//! Pythagorean verification predicates.
//!
//! `PythagoreanPremises A B C` holds when the right angle at A and the
//! rational side lengths are available; `PythagoreanConclusions A B C`
//! pushes the missing side facts. Justifications carry the reserved
//! `Pythagoras Verification` tag.

use thales_num::{close_enough, CHECK_TOL};
use tracing::warn;

use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::{Arg, PredicateKind, StatementId};
use crate::symbols::PointId;

const MAX_QUOTIENT_DEN: i64 = 64;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let a = proof.point_num(pts[0]);
    let b = proof.point_num(pts[1]);
    let c = proof.point_num(pts[2]);
    close_enough((a - b).dot(&(a - c)), 0.0)
}

pub(crate) fn check(proof: &mut ProofState, sid: StatementId) -> bool {
    let pts = super::statement_points(proof.data(sid));
    why_premises(proof, sid, &pts).is_some()
}

pub(crate) fn why_premises(
    proof: &mut ProofState,
    sid: StatementId,
    pts: &[PointId],
) -> Option<Dependency> {
    let perp = perp_statement(proof, pts)?;
    let perp_check = proof.check(perp);
    let [ab, ac, bc] = length_statements(proof, pts)?;
    let check_ab = proof.check(ab);
    let check_ac = proof.check(ac);
    let check_bc = proof.check(bc);
    let premises: Vec<StatementId> = if check_ab && check_ac && check_bc {
        vec![ab, ac, bc]
    } else if perp_check && check_ac && check_bc {
        vec![perp, ac, bc]
    } else if perp_check && check_ab && check_bc {
        vec![ab, perp, bc]
    } else if perp_check && check_ab && check_ac {
        vec![ab, ac, perp]
    } else {
        return None;
    };
    Some(Dependency::mk(
        sid,
        Reason::PythagorasVerification,
        &premises,
    ))
}

/// Pushes the right angle and the side lengths that are not yet known,
/// each justified like the triggering dependency.
pub(crate) fn add_conclusions(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let Some(perp) = perp_statement(proof, pts) else {
        return;
    };
    if !proof.check(perp) {
        proof.add_dep(&dep.with_new(perp));
    }
    let Some(lengths) = length_statements(proof, pts) else {
        warn!("a side length has no small rational representative; conclusions skipped");
        return;
    };
    for length in lengths {
        if !proof.check(length) {
            proof.add_dep(&dep.with_new(length));
        }
    }
}

fn perp_statement(proof: &mut ProofState, pts: &[PointId]) -> Option<StatementId> {
    proof.make_statement(
        PredicateKind::Perp,
        vec![
            Arg::Point(pts[0]),
            Arg::Point(pts[1]),
            Arg::Point(pts[0]),
            Arg::Point(pts[2]),
        ],
    )
}

fn length_statements(proof: &mut ProofState, pts: &[PointId]) -> Option<[StatementId; 3]> {
    let mut out = Vec::with_capacity(3);
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        let d = proof.point_num(pts[i]).distance(&proof.point_num(pts[j]));
        let quotient = Frac::approximate(d, MAX_QUOTIENT_DEN, CHECK_TOL)?;
        out.push(proof.make_statement(
            PredicateKind::LConst,
            vec![
                Arg::Point(pts[i]),
                Arg::Point(pts[j]),
                Arg::Value(quotient),
            ],
        )?);
    }
    out.try_into().ok()
}
