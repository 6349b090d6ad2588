use thales_construct::build_problem;
use thales_engine::{run_loop, write_proof_steps, Matcher};
use thales_lang::Problem;

#[test]
fn incenter_excenter_perpendicular_needs_no_rules() {
    let problem = Problem::from_text(
        "a b c = triangle a b c; d = incenter d a b c; e = excenter e a b c ? perp d c c e",
    )
    .unwrap();
    let mut proof = build_problem(&problem, 998_244_353, 100).unwrap();

    // Both centers contribute their three bisector facts.
    assert_eq!(proof.hypergraph.premises().len(), 6);

    let infos = run_loop(&mut proof, &mut Matcher::new(None), &[], None).unwrap();
    assert!(infos.success, "bisector premises alone must close the goal");
    assert!(!infos.exhausted);
    assert_eq!(infos.goals_proven, 1);
    assert_eq!(infos.goals_total, 1);

    // The proof renders from the explicit premises.
    let text = write_proof_steps(&mut proof).unwrap();
    assert!(text.contains("* Proof steps:"));
    assert!(text.contains("IN_PREMISES"));
}
