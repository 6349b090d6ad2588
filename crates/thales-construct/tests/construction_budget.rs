use thales_construct::build_problem;
use thales_core::ThalesError;
use thales_lang::Problem;

#[test]
fn construction_fails_after_the_attempt_budget() {
    // The goal is numerically false for every sampled triangle, so every
    // dependency check fails and the budget runs out.
    let problem = Problem::from_text("a b c = triangle a b c ? perp a b a c").unwrap();
    let max_attempts = 100;
    let err = build_problem(&problem, 7, max_attempts).unwrap_err();
    match &err {
        ThalesError::Construction(info) => {
            assert!(
                info.message.contains(&format!("failed {max_attempts} times")),
                "unexpected message: {}",
                info.message
            );
        }
        other => panic!("expected a construction error, got {other:?}"),
    }
}

#[test]
fn structurally_broken_problems_fail_without_burning_the_budget() {
    let problem = Problem::from_text("a b c = triangle a b c; d = warp d a b ? perp a b a c").unwrap();
    let err = build_problem(&problem, 7, 100).unwrap_err();
    match err {
        ThalesError::Construction(info) => {
            assert_eq!(info.code, "unknown-construction");
        }
        other => panic!("expected a construction error, got {other:?}"),
    }
}
