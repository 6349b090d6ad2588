use thales_construct::build_problem;
use thales_engine::{run_loop, trace_partition, Matcher};
use thales_lang::{Problem, Rule, DEFAULT_RULES};

const SEED: u64 = 998_244_353;

const ORTHOCENTER: &str =
    "a b c = triangle a b c; d = on_tline d b a c, on_tline d c a b ? perp a d b c";

const ORTHOCENTER_AUX: &str = "a b c = triangle a b c; \
     d = on_tline d b a c, on_tline d c a b; \
     e = on_line e a c, on_line e b d \
     ? simtri a b e d c e";

const ORTHOCENTER_AUX_PERP: &str = "a b c = triangle a b c; \
     d = on_tline d b a c, on_tline d c a b; \
     e = on_line e a c, on_line e b d \
     ? perp a d b c";

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[test]
fn orthocenter_exhausts_without_the_auxiliary_point() {
    let problem = Problem::from_text(ORTHOCENTER).unwrap();
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    let mut proof = build_problem(&problem, SEED, 100).unwrap();
    let infos = run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
    assert!(!infos.success);
    assert!(infos.exhausted);
    assert_eq!(infos.goals_proven, 0);
}

#[test]
fn orthocenter_with_auxiliary_point_succeeds() {
    let problem = Problem::from_text(ORTHOCENTER_AUX).unwrap();
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    let mut proof = build_problem(&problem, SEED, 100).unwrap();

    // Pure angle chasing on the construction premises already settles
    // these three equalities, before any rule is applied.
    for text in [
        "eqangle e a a b e b d c",
        "eqangle e a a b e d d c",
        "eqangle b e e a c e e d",
    ] {
        let sid = proof.statement_from_tokens(&toks(text)).unwrap().unwrap();
        assert!(proof.check(sid), "`{text}` must check from the premises");
    }

    let infos = run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
    assert!(infos.success, "similar triangles goal must be proven");
    assert!(!infos.exhausted);
}

#[test]
fn backward_trace_partitions_setup_and_auxiliary_premises() {
    let problem = Problem::from_text(ORTHOCENTER_AUX_PERP).unwrap();
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    let mut proof = build_problem(&problem, SEED, 100).unwrap();
    let infos = run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
    assert!(infos.success, "the third altitude must be derivable");

    let (setup, aux) = trace_partition(&mut proof).unwrap();
    let reprs = |set: &std::collections::BTreeSet<thales_engine::StatementId>| {
        set.iter()
            .map(|sid| proof.repr(*sid))
            .collect::<std::collections::BTreeSet<String>>()
    };
    assert_eq!(
        reprs(&setup),
        ["perp a c b d", "perp a b c d"]
            .into_iter()
            .map(str::to_string)
            .collect()
    );
    assert_eq!(
        reprs(&aux),
        ["coll a c e", "coll b d e"]
            .into_iter()
            .map(str::to_string)
            .collect()
    );
}
