//! Breadth-first saturation: match every rule, apply every surviving
//! instantiation, repeat until the goals check or a full sweep makes no
//! progress.

use serde::{Deserialize, Serialize};
use thales_core::{ErrorInfo, ThalesError};
use thales_lang::Rule;
use tracing::{debug, info};

use crate::dependency::Dependency;
use crate::matcher::Matcher;
use crate::proof::ProofState;
use crate::statement::PredicateKind;

/// Summary of one solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfos {
    /// Whether every goal was proven.
    pub success: bool,
    /// Number of engine steps executed.
    pub steps: u64,
    /// Whether the loop reached a fixpoint without proving all goals.
    pub exhausted: bool,
    /// Goals currently proven.
    pub goals_proven: usize,
    /// Total number of goals.
    pub goals_total: usize,
    /// Statements known to the hypergraph at termination.
    pub statements_known: usize,
}

/// The saturation driver: two FIFO buffers and a progress flag.
///
/// One `step` either reports goal success, matches one rule, applies one
/// candidate dependency, or reloads the rule buffer; the caller owns the
/// loop and may interleave work or stop between steps.
#[derive(Debug, Default)]
pub struct DdEngine {
    rule_buffer: Vec<Rule>,
    application_buffer: Vec<Dependency>,
    progress: bool,
}

impl DdEngine {
    /// Creates an idle engine.
    pub fn new() -> Self {
        Self {
            rule_buffer: Vec::new(),
            application_buffer: Vec::new(),
            progress: true,
        }
    }

    /// Runs one step. Returns `false` when the loop should stop: either
    /// every goal checks, or a whole sweep added nothing new.
    pub fn step(&mut self, proof: &mut ProofState, matcher: &mut Matcher, rules: &[Rule]) -> bool {
        if proof.check_goals() {
            return false;
        }
        if let Some(rule) = self.rule_buffer.pop() {
            let deps = matcher.match_rule(proof, &rule);
            debug!(rule = %rule.description, candidates = deps.len(), "matched");
            self.application_buffer.extend(deps);
        } else if let Some(dep) = self.application_buffer.pop() {
            if proof.apply_dep(&dep) {
                self.progress = true;
            }
        } else {
            if !self.progress {
                return false;
            }
            self.progress = false;
            self.rule_buffer = rules.to_vec();
            debug!("sweep reloaded");
        }
        true
    }
}

/// Drives the engine to success or exhaustion and reports run infos.
///
/// `max_steps` bounds runaway rule sets; hitting the bound terminates the
/// run without marking it exhausted.
pub fn run_loop(
    proof: &mut ProofState,
    matcher: &mut Matcher,
    rules: &[Rule],
    max_steps: Option<u64>,
) -> Result<RunInfos, ThalesError> {
    validate_rules(rules)?;
    let mut engine = DdEngine::new();
    let mut steps: u64 = 0;
    let mut interrupted = false;
    while engine.step(proof, matcher, rules) {
        steps += 1;
        if max_steps.is_some_and(|max| steps >= max) {
            interrupted = true;
            break;
        }
    }
    let success = proof.check_goals();
    let infos = RunInfos {
        success,
        steps,
        exhausted: !success && !interrupted,
        goals_proven: proof.goals_proven(),
        goals_total: proof.goals.len(),
        statements_known: proof.hypergraph.statement_count(),
    };
    info!(
        success = infos.success,
        steps = infos.steps,
        exhausted = infos.exhausted,
        "run finished"
    );
    Ok(infos)
}

fn validate_rules(rules: &[Rule]) -> Result<(), ThalesError> {
    for rule in rules {
        for sentence in rule.premises.iter().chain(rule.conclusions.iter()) {
            if PredicateKind::from_name(&sentence.name).is_none() {
                return Err(ThalesError::Parse(
                    ErrorInfo::new("unknown-predicate", "rule uses a predicate outside the closed set")
                        .with_context("rule", &rule.description)
                        .with_context("predicate", &sentence.name),
                ));
            }
        }
    }
    Ok(())
}
