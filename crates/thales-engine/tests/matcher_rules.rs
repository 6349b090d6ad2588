use thales_engine::{Dependency, Matcher, ProofState, Reason};
use thales_lang::Rule;
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// An isosceles configuration: o equidistant from a and b, plus a stray
/// point to exercise the numeric pre-filter.
fn isosceles_state() -> ProofState {
    let mut proof = ProofState::new();
    for (name, x, y) in [
        ("a", 1.0, 0.0),
        ("b", 0.0, 1.0),
        ("o", 0.0, 0.0),
        ("s", 0.4, 0.7),
    ] {
        proof
            .symbols
            .add_point(name, PointNum::new(x, y), &[])
            .unwrap();
    }
    let cong = proof.statement_from_tokens(&toks("cong o a o b")).unwrap().unwrap();
    proof.add_dep(&Dependency::mk(cong, Reason::InPremises, &[]));
    proof
}

fn isosceles_rule() -> Rule {
    Rule::parse_text(
        "Base angles of an isosceles triangle\n\
         cong o a o b, ncoll o a b\n\
         eqangle o a a b a b o b\n",
    )
    .unwrap()
    .remove(0)
}

#[test]
fn matched_instantiations_apply_and_make_their_conclusion_check() {
    let mut proof = isosceles_state();
    let mut matcher = Matcher::new(None);
    let deps = matcher.match_rule(&mut proof, &isosceles_rule());
    assert!(!deps.is_empty(), "the isosceles binding must match");
    for dep in &deps {
        for premise in dep.premises.iter() {
            assert!(proof.check_numerical(*premise));
        }
        assert!(proof.apply_dep(dep));
        assert!(proof.check(dep.statement), "add must make check true");
        assert!(proof.check_numerical(dep.statement));
    }
}

#[test]
fn matching_is_deterministic_across_matchers() {
    let render = |proof: &ProofState, deps: &[Dependency]| -> Vec<String> {
        deps.iter()
            .map(|dep| format!("{} <- {:?}", proof.repr(dep.statement), dep.reason))
            .collect()
    };
    let mut proof1 = isosceles_state();
    let mut proof2 = isosceles_state();
    let first = Matcher::new(None).match_rule(&mut proof1, &isosceles_rule());
    let second = Matcher::new(None).match_rule(&mut proof2, &isosceles_rule());
    assert_eq!(render(&proof1, &first), render(&proof2, &second));
}

#[test]
fn known_conclusions_are_not_rematched() {
    let mut proof = isosceles_state();
    let mut matcher = Matcher::new(None);
    let deps = matcher.match_rule(&mut proof, &isosceles_rule());
    for dep in &deps {
        proof.apply_dep(dep);
    }
    assert!(matcher.match_rule(&mut proof, &isosceles_rule()).is_empty());
}

#[test]
fn disk_cache_roundtrips_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("cache").join("matcher.json");

    let mut proof1 = isosceles_state();
    let mut warm = Matcher::new(Some(cache_path.clone()));
    let first = warm.match_rule(&mut proof1, &isosceles_rule());
    assert!(cache_path.exists(), "cache file must be written");
    let text = std::fs::read_to_string(&cache_path).unwrap();
    assert!(text.contains("matcher"));

    let mut proof2 = isosceles_state();
    let mut cold = Matcher::new(Some(cache_path));
    let second = cold.match_rule(&mut proof2, &isosceles_rule());
    let reprs = |proof: &ProofState, deps: &[Dependency]| -> Vec<String> {
        deps.iter().map(|dep| proof.repr(dep.statement)).collect()
    };
    assert_eq!(reprs(&proof1, &first), reprs(&proof2, &second));
}
