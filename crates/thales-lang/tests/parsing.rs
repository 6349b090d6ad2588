use thales_lang::{Problem, Rule, Sentence, DEFAULT_RULES};

#[test]
fn problems_split_into_clauses_and_goals() {
    let problem = Problem::from_text(
        "a b c = triangle a b c; d = on_tline d b a c, on_tline d c a b ? perp a d b c",
    )
    .unwrap();
    assert_eq!(problem.clauses.len(), 2);
    assert_eq!(problem.clauses[0].points, vec!["a", "b", "c"]);
    assert_eq!(problem.clauses[1].points, vec!["d"]);
    assert_eq!(problem.clauses[1].constructions.len(), 2);
    assert_eq!(problem.goals.len(), 1);
    assert_eq!(problem.goals[0].name, "perp");
    assert_eq!(problem.point_names(), vec!["a", "b", "c", "d"]);
}

#[test]
fn problems_without_goals_parse() {
    let problem = Problem::from_text("a b = segment a b").unwrap();
    assert!(problem.goals.is_empty());
}

#[test]
fn malformed_clauses_error() {
    assert!(Problem::from_text("a b c triangle a b c").is_err());
    assert!(Problem::from_text(" = triangle a b c").is_err());
}

#[test]
fn rules_parse_as_three_line_records() {
    let rules = Rule::parse_text(
        "Base angles of an isosceles triangle\n\
         cong o a o b, ncoll o a b\n\
         eqangle o a a b a b o b\n\
         \n\
         Midline is parallel to the base\n\
         midp e a b, midp f a c\n\
         para e f b c\n",
    )
    .unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].premises.len(), 2);
    assert_eq!(rules[0].conclusions.len(), 1);
    assert_eq!(rules[0].variables(), vec!["o", "a", "b"]);
    assert_eq!(rules[1].variables(), vec!["e", "a", "b", "f", "c"]);
}

#[test]
fn rules_reject_unbound_conclusion_variables() {
    let err = Rule::parse_text(
        "Broken record\n\
         cong o a o b\n\
         eqangle o a a b a b o z\n",
    );
    assert!(err.is_err());
}

#[test]
fn the_default_rule_set_parses() {
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    assert!(rules.len() >= 15);
    for rule in &rules {
        assert!(!rule.premises.is_empty(), "{}", rule.description);
        assert!(!rule.conclusions.is_empty(), "{}", rule.description);
    }
}

#[test]
fn sentence_translation_substitutes_bound_variables() {
    use std::collections::BTreeMap;
    let sentence = Sentence::from_text("perp a b c d").unwrap();
    let mapping: BTreeMap<String, String> = [("a", "x"), ("b", "y"), ("c", "x"), ("d", "z")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        thales_lang::translate_sentence(&mapping, &sentence),
        vec!["perp", "x", "y", "x", "z"]
    );
}
