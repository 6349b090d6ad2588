//! `coll A B C ...` — three or more points on one line.

use thales_num::close_enough;
use tracing::warn;

use super::anchor;
use crate::algebra::AddOutcome;
use crate::dependency::{Dependency, Reason};
use crate::frac::Frac;
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let origin = proof.point_num(pts[0]);
    let direction = proof.point_num(pts[1]) - origin;
    pts[2..]
        .iter()
        .all(|p| close_enough(direction.cross(&(proof.point_num(*p) - origin)), 0.0))
}

/// Folds a collinearity fact into the line symbols and keeps the angle
/// table consistent: every representative absorbed by the merge gets a
/// direction-equality equation justified by the same dependency.
pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    let outcome = proof.symbols.make_coll(pts, dep);
    let Some(target) = outcome.target else {
        return;
    };
    for merged in outcome.merged {
        let residue = proof.line_dir(merged) - proof.line_dir(target);
        let Some(constant) = anchor(residue, Frac::zero()) else {
            warn!("merged lines disagree numerically; skipping direction tie");
            continue;
        };
        let terms = [(merged, Frac::one()), (target, Frac::one().neg())];
        if proof.angle_table.add_eq(&terms, constant, dep) == AddOutcome::Overflow {
            warn!("angle table overflow while tying merged lines");
        }
    }
}

/// The witness is the original line with the smallest point set whose own
/// justification covers the requested points; a line with no origin was
/// assembled during construction.
pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    match proof.symbols.why_coll(pts)? {
        Some(origin) => Some(origin.with_new(sid)),
        None => Some(Dependency::mk(sid, Reason::Construction, &[])),
    }
}
