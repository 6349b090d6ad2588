//! Proof extraction and run artifacts: backward shortest-proof traversal
//! over the dependency hypergraph, the linearized proof text, the
//! setup/auxiliary premise partition, and the machine-readable dump.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thales_core::{ErrorInfo, ThalesError};

use crate::dependency::{Dependency, Reason};
use crate::proof::ProofState;
use crate::statement::StatementId;
use crate::symbols::PointId;

/// The ordered dependencies participating in the shortest known proof of
/// every goal (the union of the backward slices, in emission order).
///
/// Fails loudly when a checked goal has no acyclic justification: a
/// success outcome from saturation implies a proof must exist, so a miss
/// is an engine bug, not a user error.
pub fn proof_deps(
    proof: &mut ProofState,
    goals: &[StatementId],
) -> Result<Vec<Dependency>, ThalesError> {
    let mut memo: BTreeMap<StatementId, Option<Vec<Dependency>>> = BTreeMap::new();
    let mut ordered: Vec<Dependency> = Vec::new();
    for goal in goals {
        let lines = sub_proof(proof, *goal, &mut memo).ok_or_else(|| {
            ThalesError::Engine(
                ErrorInfo::new("proof-extraction", "no acyclic proof for a checked goal")
                    .with_context("goal", proof.repr(*goal)),
            )
        })?;
        for dep in lines {
            if !ordered.contains(&dep) {
                ordered.push(dep);
            }
        }
    }
    Ok(ordered)
}

/// Backward best-first resolution of one statement.
///
/// Returns the shortest tuple of proof lines justifying the statement, or
/// `None` when every justification is cyclic or unresolved. A statement is
/// marked in-progress (memo value `None`) while its premises resolve, so
/// cyclic candidates are refused until a non-cyclic proof completes.
fn sub_proof(
    proof: &mut ProofState,
    sid: StatementId,
    memo: &mut BTreeMap<StatementId, Option<Vec<Dependency>>>,
) -> Option<Vec<Dependency>> {
    if let Some(cached) = memo.get(&sid) {
        return cached.clone();
    }
    memo.insert(sid, None);
    let mut candidates: BTreeSet<Dependency> = proof
        .hypergraph
        .edges_of(sid)
        .cloned()
        .unwrap_or_default();
    if let Some(extra) = proof.why(sid) {
        candidates.insert(extra);
    }
    let mut best: Option<Vec<Dependency>> = None;
    for dep in candidates {
        let mut lines: Vec<Dependency> = Vec::new();
        let mut resolved = true;
        for premise in dep.premises.to_vec() {
            match sub_proof(proof, premise, memo) {
                Some(premise_lines) => lines.extend(premise_lines),
                None => {
                    resolved = false;
                    break;
                }
            }
        }
        if !resolved {
            continue;
        }
        lines.push(dep);
        let better = match &best {
            None => true,
            Some(best) => {
                lines.len() < best.len()
                    || (lines.len() == best.len()
                        && proof_key(proof, &lines) < proof_key(proof, best))
            }
        };
        if better {
            best = Some(lines);
        }
    }
    match best {
        Some(lines) => {
            memo.insert(sid, Some(lines.clone()));
            Some(lines)
        }
        None => {
            memo.remove(&sid);
            None
        }
    }
}

/// Ties between equal-length proofs break on the lexicographic order of
/// the rendered candidate lines, keeping extraction reproducible.
fn proof_key(proof: &ProofState, lines: &[Dependency]) -> Vec<String> {
    lines
        .iter()
        .map(|dep| crate::matcher::dependency_repr(proof, dep))
        .collect()
}

/// Renders the linearized proof of all currently proven goals.
pub fn write_proof_steps(proof: &mut ProofState) -> Result<String, ThalesError> {
    let goals: Vec<StatementId> = proof
        .goals
        .clone()
        .into_iter()
        .filter(|goal| proof.check(*goal))
        .collect();
    let mut labels: BTreeMap<StatementId, String> = BTreeMap::new();
    for (index, goal) in goals.iter().enumerate() {
        labels.insert(*goal, format!("g{index}"));
    }
    let deps = proof_deps(proof, &goals)?;

    let mut premises: Vec<&Dependency> = Vec::new();
    let mut numerical: Vec<&Dependency> = Vec::new();
    let mut steps: Vec<&Dependency> = Vec::new();
    for dep in &deps {
        match dep.reason {
            Reason::InPremises => premises.push(dep),
            Reason::NumericalCheck => numerical.push(dep),
            _ => steps.push(dep),
        }
    }

    let mut counter: usize = 0;
    let mut rediger = |dep: &Dependency, proof: &ProofState| -> String {
        for statement in std::iter::once(dep.statement).chain(dep.premises.iter().copied()) {
            if !labels.contains_key(&statement) {
                labels.insert(statement, counter.to_string());
                counter += 1;
            }
        }
        let premise_text: Vec<String> = dep
            .premises
            .iter()
            .map(|p| format!("{} [{}]", proof.pretty(*p), labels[p]))
            .collect();
        format!(
            "{} ({})=> {} [{}]",
            premise_text.join(", "),
            dep.reason,
            proof.pretty(dep.statement),
            labels[&dep.statement]
        )
    };

    let mut out = String::from("==========================\n");
    out.push_str("* From problem construction:\n");
    out.push_str(&format!(
        "Points : {}\n",
        proof.symbols.point_names_sorted().join(", ")
    ));
    for dep in premises {
        out.push_str(&rediger(dep, proof));
        out.push('\n');
    }
    for dep in numerical {
        out.push_str(&rediger(dep, proof));
        out.push('\n');
    }
    out.push_str("* Proof steps:\n");
    for (index, dep) in steps.into_iter().enumerate() {
        out.push_str(&format!("{index:03}. {}\n", rediger(dep, proof)));
    }
    out.push_str("\n==========================");
    Ok(out)
}

/// Splits the `IN_PREMISES` leaves of the goals' backward slice into the
/// setup (premises over the goals' construction ancestry) and the
/// auxiliary premises (those mentioning points outside it).
pub fn trace_partition(
    proof: &mut ProofState,
) -> Result<(BTreeSet<StatementId>, BTreeSet<StatementId>), ThalesError> {
    let goals: Vec<StatementId> = proof
        .goals
        .clone()
        .into_iter()
        .filter(|goal| proof.check(*goal))
        .collect();
    let deps = proof_deps(proof, &goals)?;

    let mut closure: BTreeSet<PointId> = BTreeSet::new();
    let mut frontier: Vec<PointId> = goals
        .iter()
        .flat_map(|goal| crate::predicates::statement_points(proof.data(*goal)))
        .collect();
    while let Some(point) = frontier.pop() {
        if closure.insert(point) {
            frontier.extend(proof.symbols.point(point).parents.iter().copied());
        }
    }

    let mut setup = BTreeSet::new();
    let mut aux = BTreeSet::new();
    for dep in deps {
        if dep.reason != Reason::InPremises {
            continue;
        }
        let points = crate::predicates::statement_points(proof.data(dep.statement));
        if points.iter().all(|p| closure.contains(p)) {
            setup.insert(dep.statement);
        } else {
            aux.insert(dep.statement);
        }
    }
    Ok((setup, aux))
}

/// Machine-readable dump of the dependency hypergraph.
#[derive(Debug, Clone, Serialize)]
pub struct HypergraphDump {
    /// Every known statement with its recorded justifications.
    pub statements: Vec<StatementDump>,
}

/// One statement of the dump.
#[derive(Debug, Clone, Serialize)]
pub struct StatementDump {
    /// Canonical token representation.
    pub statement: String,
    /// Human-readable rendering.
    pub pretty: String,
    /// Recorded justifications.
    pub justifications: Vec<JustificationDump>,
}

/// One hyperedge of the dump.
#[derive(Debug, Clone, Serialize)]
pub struct JustificationDump {
    /// Reason label (reserved tag or rule description).
    pub reason: String,
    /// Premise statements in canonical representation.
    pub premises: Vec<String>,
}

/// Dumps the hypergraph in discovery order.
pub fn dump_hypergraph(proof: &ProofState) -> HypergraphDump {
    let statements = proof
        .hypergraph
        .statements()
        .map(|sid| StatementDump {
            statement: proof.repr(sid),
            pretty: proof.pretty(sid),
            justifications: proof
                .hypergraph
                .edges_of(sid)
                .into_iter()
                .flatten()
                .map(|dep| JustificationDump {
                    reason: dep.reason.to_string(),
                    premises: dep.premises.iter().map(|p| proof.repr(*p)).collect(),
                })
                .collect(),
        })
        .collect();
    HypergraphDump { statements }
}
