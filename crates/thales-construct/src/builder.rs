//! The diagram builder: samples every clause, dependency-checks every
//! emitted premise and every goal against the coordinates, and retries the
//! whole diagram on failure up to a fixed attempt budget.

use std::collections::BTreeMap;

use thales_core::{derive_substream_seed, ErrorInfo, RngHandle, ThalesError};
use thales_engine::{Dependency, ProofState, Reason, StatementId};
use thales_lang::Problem;
use thales_num::PointNum;
use tracing::{debug, info};

use crate::definitions::sketch_clause;

/// Default attempt budget before construction fails.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Builds the initial proof state for a problem: all points created, all
/// construction premises recorded with reason `IN_PREMISES`, and the goal
/// statements parsed and numerically validated.
///
/// Each attempt runs on its own deterministic RNG substream, so retries
/// never replay a failed diagram and runs reproduce for a fixed seed.
pub fn build_problem(
    problem: &Problem,
    seed: u64,
    max_attempts: u32,
) -> Result<ProofState, ThalesError> {
    for attempt in 0..max_attempts {
        let mut rng = RngHandle::from_seed(derive_substream_seed(seed, u64::from(attempt)));
        match try_build(problem, &mut rng)? {
            Some(state) => {
                info!(attempt, "construction succeeded");
                return Ok(state);
            }
            None => debug!(attempt, "dependency check failed; resampling the diagram"),
        }
    }
    Err(ThalesError::Construction(
        ErrorInfo::new(
            "dep-check-budget",
            format!("construction dependency checks failed {max_attempts} times"),
        )
        .with_context("max_attempts", max_attempts),
    ))
}

fn try_build(problem: &Problem, rng: &mut RngHandle) -> Result<Option<ProofState>, ThalesError> {
    let mut state = ProofState::new();
    let mut known: BTreeMap<String, PointNum> = BTreeMap::new();

    for clause in &problem.clauses {
        for point in &clause.points {
            if known.contains_key(point) {
                return Err(ThalesError::Construction(
                    ErrorInfo::new("duplicate-point", "clause redeclares a point")
                        .with_context("point", point),
                ));
            }
        }
        let Some(sketched) = sketch_clause(clause, &known, rng)? else {
            return Ok(None);
        };
        // Ancestors: every existing point the clause's constructions
        // reference, recorded for the setup/auxiliary proof partition.
        let parents: Vec<_> = clause
            .constructions
            .iter()
            .flat_map(|construction| construction.args.iter())
            .filter_map(|name| state.symbols.point_by_name(name))
            .collect();
        for (name, num) in &sketched.coords {
            state.symbols.add_point(name, *num, &parents)?;
            known.insert(name.clone(), *num);
        }
        for basic in &sketched.basics {
            let sid = state.statement_from_tokens(basic)?.ok_or_else(|| {
                ThalesError::Construction(
                    ErrorInfo::new("illegal-basic", "construction emitted an illegal premise")
                        .with_context("tokens", basic.join(" ")),
                )
            })?;
            if !state.check_numerical(sid) {
                return Ok(None);
            }
            state.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
        }
    }

    let mut goals: Vec<StatementId> = Vec::new();
    for goal in &problem.goals {
        let sid = state.statement_from_tokens(&goal.tokens())?.ok_or_else(|| {
            ThalesError::Parse(
                ErrorInfo::new("illegal-goal", "goal statement is structurally illegal")
                    .with_context("goal", goal.to_string()),
            )
        })?;
        if !state.check_numerical(sid) {
            return Ok(None);
        }
        goals.push(sid);
    }
    state.goals = goals;
    Ok(Some(state))
}
