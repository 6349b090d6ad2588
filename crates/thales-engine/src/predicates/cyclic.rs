//! `cyclic A B C D ...` — four or more points on one circle.

use thales_num::CircleNum;
use tracing::warn;

use crate::dependency::{Dependency, Reason};
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

pub(crate) fn check_numerical(proof: &ProofState, pts: &[PointId]) -> bool {
    let circle = match CircleNum::through(
        &proof.point_num(pts[0]),
        &proof.point_num(pts[1]),
        &proof.point_num(pts[2]),
    ) {
        Ok(circle) => circle,
        Err(_) => return false,
    };
    pts[3..].iter().all(|p| circle.contains(&proof.point_num(*p)))
}

pub(crate) fn add(proof: &mut ProofState, pts: &[PointId], dep: &Dependency) {
    if proof.symbols.make_cyclic(pts, dep).is_err() {
        // The numeric gate passed, so the defining triplet cannot actually
        // be degenerate; reaching this means the diagram is inconsistent.
        warn!("skipping concyclicity fold on a degenerate triplet");
    }
}

pub(crate) fn why(proof: &mut ProofState, sid: StatementId, pts: &[PointId]) -> Option<Dependency> {
    match proof.symbols.why_cyclic(pts)? {
        Some(origin) => Some(origin.with_new(sid)),
        None => Some(Dependency::mk(sid, Reason::Construction, &[])),
    }
}
