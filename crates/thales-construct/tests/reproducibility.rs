use thales_construct::build_problem;
use thales_engine::{run_loop, write_proof_steps, Matcher, RunInfos};
use thales_lang::{Problem, Rule, DEFAULT_RULES};

const PROBLEM: &str = "a b c = triangle a b c; \
     d = on_tline d b a c, on_tline d c a b; \
     e = on_line e a c, on_line e b d \
     ? perp a d b c";

fn run_once(seed: u64) -> (String, RunInfos) {
    let problem = Problem::from_text(PROBLEM).unwrap();
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    let mut proof = build_problem(&problem, seed, 100).unwrap();
    let infos = run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
    let text = write_proof_steps(&mut proof).unwrap();
    (text, infos)
}

#[test]
fn identical_seeds_reproduce_proof_text_and_run_infos() {
    let (text1, infos1) = run_once(998_244_353);
    let (text2, infos2) = run_once(998_244_353);
    assert_eq!(infos1, infos2);
    assert_eq!(text1, text2);
    assert!(infos1.success);
}
