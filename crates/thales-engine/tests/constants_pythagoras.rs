use thales_engine::{Dependency, ProofState, Reason};
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// The 3-4-5 right triangle with the right angle at a.
fn right_triangle() -> ProofState {
    let mut proof = ProofState::new();
    proof
        .symbols
        .add_point("a", PointNum::new(0.0, 0.0), &[])
        .unwrap();
    proof
        .symbols
        .add_point("b", PointNum::new(3.0, 0.0), &[])
        .unwrap();
    proof
        .symbols
        .add_point("c", PointNum::new(0.0, 4.0), &[])
        .unwrap();
    proof
}

fn premise(proof: &mut ProofState, text: &str) -> thales_engine::StatementId {
    let sid = proof.statement_from_tokens(&toks(text)).unwrap().unwrap();
    assert!(proof.check_numerical(sid), "`{text}` must hold numerically");
    proof.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
    sid
}

#[test]
fn pythagorean_conclusions_push_the_missing_side() {
    let mut proof = right_triangle();
    let ab = premise(&mut proof, "lconst a b 3");
    let ac = premise(&mut proof, "lconst a c 4");
    premise(&mut proof, "perp a b a c");

    let conclusions = proof
        .statement_from_tokens(&toks("PythagoreanConclusions a b c"))
        .unwrap()
        .unwrap();
    proof.add_dep(&Dependency::mk(
        conclusions,
        Reason::Rule("Pythagorean theorem".to_string()),
        &[ab, ac],
    ));

    let hypotenuse = proof.statement_from_tokens(&toks("lconst b c 5")).unwrap().unwrap();
    assert!(proof.check(hypotenuse), "the hypotenuse length must follow");

    // Derived ratio constants combine the recorded lengths exactly.
    let ratio = proof
        .statement_from_tokens(&toks("rconst b c a b 5/3"))
        .unwrap()
        .unwrap();
    assert!(proof.check(ratio));
}

#[test]
fn pythagorean_premises_reconstruct_with_the_verification_tag() {
    let mut proof = right_triangle();
    premise(&mut proof, "lconst a b 3");
    premise(&mut proof, "lconst a c 4");
    premise(&mut proof, "lconst b c 5");

    let premises = proof
        .statement_from_tokens(&toks("PythagoreanPremises a b c"))
        .unwrap()
        .unwrap();
    assert!(proof.check(premises));
    let why = proof.why(premises).expect("verification must reconstruct");
    assert_eq!(why.reason, Reason::PythagorasVerification);
    assert_eq!(why.premises.len(), 3);
}

#[test]
fn constant_angles_roundtrip_and_canonicalize() {
    let mut proof = ProofState::new();
    proof
        .symbols
        .add_point("a", PointNum::new(0.0, 0.0), &[])
        .unwrap();
    proof
        .symbols
        .add_point("b", PointNum::new(1.0, 0.0), &[])
        .unwrap();
    proof
        .symbols
        .add_point("c", PointNum::new(1.0, 1.0), &[])
        .unwrap();

    // The directed gap from ab to ac is a quarter turn; swapping the pairs
    // flips the constant modulo one.
    let sid = proof.statement_from_tokens(&toks("aconst a b a c 3/4")).unwrap().unwrap();
    let swapped = proof.statement_from_tokens(&toks("aconst a c a b 1/4")).unwrap().unwrap();
    assert_eq!(sid, swapped);
    assert!(proof.check_numerical(sid));

    assert!(!proof.check(sid));
    proof.add_dep(&Dependency::mk(sid, Reason::InPremises, &[]));
    assert!(proof.check(sid));
}
