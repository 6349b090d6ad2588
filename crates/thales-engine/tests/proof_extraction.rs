use std::sync::Arc;

use thales_engine::{proof_deps, Dependency, ProofState, Reason, StatementId};
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Points in general position; the collinearity statements below are used
/// purely as hypergraph nodes (edges are inserted directly, bypassing the
/// symbolic folds), so their `why` reconstruction stays empty.
fn generic_state() -> (ProofState, Vec<StatementId>) {
    let mut proof = ProofState::new();
    let coords = [
        ("a", 0.0, 0.0),
        ("b", 1.0, 0.1),
        ("c", 0.2, 1.0),
        ("d", 1.3, 1.7),
        ("e", 2.1, 0.4),
        ("f", 0.7, 2.3),
    ];
    for (name, x, y) in coords {
        proof
            .symbols
            .add_point(name, PointNum::new(x, y), &[])
            .unwrap();
    }
    let statements = [
        "coll a b c",
        "coll a b d",
        "coll a b e",
        "coll a b f",
        "coll a c d",
    ]
    .iter()
    .map(|text| proof.statement_from_tokens(&toks(text)).unwrap().unwrap())
    .collect();
    (proof, statements)
}

fn edge(statement: StatementId, reason: Reason, premises: &[StatementId]) -> Dependency {
    Dependency {
        statement,
        reason,
        premises: Arc::from(premises),
    }
}

#[test]
fn extraction_picks_the_shortest_justification() {
    let (mut proof, s) = generic_state();
    let (premise, other, goal) = (s[0], s[1], s[2]);
    proof
        .hypergraph
        .add_edge(edge(premise, Reason::InPremises, &[]));
    proof.hypergraph.add_edge(edge(other, Reason::InPremises, &[]));
    // Long route: goal <- other <- premise; short route: goal <- premise.
    proof.hypergraph.add_edge(edge(
        goal,
        Reason::Rule("long".to_string()),
        &[premise, other],
    ));
    proof
        .hypergraph
        .add_edge(edge(goal, Reason::Rule("short".to_string()), &[premise]));

    let lines = proof_deps(&mut proof, &[goal]).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].reason, Reason::InPremises);
    assert_eq!(lines[1].reason, Reason::Rule("short".to_string()));
}

#[test]
fn cyclic_justifications_are_refused_until_an_acyclic_proof_exists() {
    let (mut proof, s) = generic_state();
    let (premise, first, second) = (s[0], s[1], s[2]);
    proof
        .hypergraph
        .add_edge(edge(premise, Reason::InPremises, &[]));
    // first and second justify each other; only the premise breaks the
    // cycle.
    proof
        .hypergraph
        .add_edge(edge(first, Reason::Rule("loop-a".to_string()), &[second]));
    proof
        .hypergraph
        .add_edge(edge(second, Reason::Rule("loop-b".to_string()), &[first]));
    proof
        .hypergraph
        .add_edge(edge(first, Reason::Rule("ground".to_string()), &[premise]));

    let lines = proof_deps(&mut proof, &[first]).unwrap();
    let reasons: Vec<String> = lines.iter().map(|dep| dep.reason.to_string()).collect();
    assert_eq!(reasons, vec!["IN_PREMISES".to_string(), "ground".to_string()]);
}

#[test]
fn unprovable_goals_fail_loudly() {
    let (mut proof, s) = generic_state();
    let goal = s[0];
    assert!(proof_deps(&mut proof, &[goal]).is_err());
}

#[test]
fn slices_of_multiple_goals_union_without_duplicates() {
    let (mut proof, s) = generic_state();
    let (premise, g1, g2) = (s[0], s[1], s[2]);
    proof
        .hypergraph
        .add_edge(edge(premise, Reason::InPremises, &[]));
    proof
        .hypergraph
        .add_edge(edge(g1, Reason::Rule("one".to_string()), &[premise]));
    proof
        .hypergraph
        .add_edge(edge(g2, Reason::Rule("two".to_string()), &[premise]));

    let lines = proof_deps(&mut proof, &[g1, g2]).unwrap();
    assert_eq!(lines.len(), 3);
    let shared = lines
        .iter()
        .filter(|dep| dep.reason == Reason::InPremises)
        .count();
    assert_eq!(shared, 1);
}
