use thales_engine::{Dependency, ProofState, Reason};
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Five points on the x axis plus one off-line witness.
fn axis_state() -> ProofState {
    let mut proof = ProofState::new();
    for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        proof
            .symbols
            .add_point(name, PointNum::new(i as f64, 0.0), &[])
            .unwrap();
    }
    proof
        .symbols
        .add_point("x", PointNum::new(0.5, 2.0), &[])
        .unwrap();
    proof
}

fn add_premise(proof: &mut ProofState, text: &str) -> thales_engine::StatementId {
    let sid = proof.statement_from_tokens(&toks(text)).unwrap().unwrap();
    assert!(proof.check_numerical(sid), "premise `{text}` must hold numerically");
    proof.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
    sid
}

#[test]
fn collinearity_folds_and_merges_lines() {
    let mut proof = axis_state();
    add_premise(&mut proof, "coll a b c");
    add_premise(&mut proof, "coll c d e");

    // Disjoint lines so far: a-b-e spans both and is not yet derivable.
    let bridge = proof.statement_from_tokens(&toks("coll a b e")).unwrap().unwrap();
    assert!(!proof.check(bridge));

    // Sharing two points with each line forces a merge into one line.
    add_premise(&mut proof, "coll b c d");
    assert!(proof.check(bridge));
}

#[test]
fn why_collinear_picks_the_tightest_witness_line() {
    let mut proof = axis_state();
    let first = add_premise(&mut proof, "coll a b c");
    add_premise(&mut proof, "coll c d e");
    // The merging fact arrives as a rule application, so the merged
    // five-point representative carries a distinguishable justification.
    let bridge = proof.statement_from_tokens(&toks("coll b c d")).unwrap().unwrap();
    proof.add_dep(&Dependency::mk(
        bridge,
        Reason::Rule("bridge".to_string()),
        &[first],
    ));

    let query = proof.statement_from_tokens(&toks("coll a b c")).unwrap().unwrap();
    let why = proof.why(query).expect("collinearity must reconstruct");
    assert_eq!(why.statement, query);
    // The original three-point premise line justifies the query, not the
    // merged representative created by the bridge.
    assert_eq!(why.reason, Reason::InPremises);
    assert!(why.premises.is_empty());
}

#[test]
fn numerically_false_collinearity_never_checks() {
    let mut proof = axis_state();
    add_premise(&mut proof, "coll a b c");
    let off = proof.statement_from_tokens(&toks("coll a b x")).unwrap().unwrap();
    assert!(!proof.check_numerical(off));
    assert!(!proof.check(off));
}

#[test]
fn concyclicity_folds_into_circle_symbols() {
    let mut proof = ProofState::new();
    // Six points on the unit circle.
    for (i, name) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
        let angle = i as f64;
        proof
            .symbols
            .add_point(name, PointNum::new(angle.cos(), angle.sin()), &[])
            .unwrap();
    }
    let sid = proof.statement_from_tokens(&toks("cyclic a b c d")).unwrap().unwrap();
    proof.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
    let other = proof.statement_from_tokens(&toks("cyclic c d e f")).unwrap().unwrap();
    proof.add_dep(&Dependency::mk(other, Reason::InPremises, &[]));

    // Three shared points merge the two circles.
    let merged = proof.statement_from_tokens(&toks("cyclic b c d e")).unwrap().unwrap();
    proof.add_dep(&Dependency::mk(merged, Reason::InPremises, &[]));
    let span = proof.statement_from_tokens(&toks("cyclic a b e f")).unwrap().unwrap();
    assert!(proof.check(span));
}

#[test]
fn midpoint_roundtrips_through_check() {
    let mut proof = axis_state();
    // b is the midpoint of a and c on the axis.
    let sid = proof.statement_from_tokens(&toks("midp b a c")).unwrap().unwrap();
    assert!(!proof.check(sid));
    proof.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
    assert!(proof.check(sid));
    // The fold makes the halves congruent as well.
    let halves = proof.statement_from_tokens(&toks("cong a b b c")).unwrap().unwrap();
    assert!(proof.check(halves));
}
