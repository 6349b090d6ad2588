use thales_construct::build_problem;
use thales_engine::{enumerate, run_loop, Matcher, ProofState, StatementId};
use thales_lang::{Problem, Rule};

/// The classical Euler line configuration: orthocenter, centroid (with its
/// midpoints) and circumcenter of one triangle.
const EULER: &str = "a b c = triangle a b c; \
     h = orthocenter h a b c; \
     x y z g = centroid x y z g a b c; \
     o = circumcenter o a b c \
     ? coll h g o";

/// A light rule set for the soundness audit; the heavy similarity rules
/// add nothing to the invariants exercised here.
const AUDIT_RULES: &str = "Congruent radii give concyclic points
cong o a o b, cong o b o c, cong o c o d, ncoll a b c
cyclic a b c d

Inscribed angles subtending a common chord
cyclic a b p q
eqangle p a p b q a q b

Midline is parallel to the base
midp e a b, midp f a c
para e f b c

Perpendicular bisector reaches equal distances
midp m a b, perp o m a b
cong o a o b

Median to the hypotenuse
perp a b b c, midp m a c
cong a m b m

Diagonals bisecting each other
midp m a b, midp m c d
para a c b d

Right angle inscribed in a semicircle
circle o a b c, coll o a c
perp a b b c

Parallel lines through a shared point coincide
para a b a c
coll a b c
";

fn solved_state() -> ProofState {
    let problem = Problem::from_text(EULER).unwrap();
    let rules = Rule::parse_text(AUDIT_RULES).unwrap();
    let mut proof = build_problem(&problem, 31, 100).unwrap();
    run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
    proof
}

fn assert_sound(proof: &mut ProofState, sids: &[StatementId], what: &str) {
    for sid in sids {
        assert!(
            proof.check(*sid),
            "{what}: `{}` must check symbolically",
            proof.repr(*sid)
        );
        assert!(
            proof.check_numerical(*sid),
            "{what}: `{}` must hold on the diagram",
            proof.repr(*sid)
        );
    }
}

#[test]
fn every_known_statement_is_numerically_true() {
    let mut proof = solved_state();
    let known: Vec<StatementId> = proof.hypergraph.statements().collect();
    assert!(!known.is_empty());
    for sid in known {
        assert!(
            proof.check_numerical(sid),
            "`{}` is known but numerically false",
            proof.repr(sid)
        );
    }
}

#[test]
fn every_recorded_premise_is_itself_known() {
    let mut proof = solved_state();
    let known: Vec<StatementId> = proof.hypergraph.statements().collect();
    let mut premises: Vec<StatementId> = Vec::new();
    for sid in known {
        for dep in proof.hypergraph.edges_of(sid).into_iter().flatten() {
            premises.extend(dep.premises.iter().copied());
        }
    }
    for premise in premises {
        assert!(
            proof.check(premise),
            "premise `{}` does not check",
            proof.repr(premise)
        );
    }
}

#[test]
fn enumerated_tuples_are_simultaneously_true_both_ways() {
    let mut proof = solved_state();

    let colls = enumerate::all_colls(&mut proof);
    assert_sound(&mut proof, &colls, "coll");
    let cyclics = enumerate::all_cyclics(&mut proof);
    assert_sound(&mut proof, &cyclics, "cyclic");
    let paras = enumerate::all_paras(&mut proof);
    assert_sound(&mut proof, &paras, "para");
    let perps = enumerate::all_perps(&mut proof);
    assert_sound(&mut proof, &perps, "perp");
    let congs = enumerate::all_congs(&mut proof);
    assert_sound(&mut proof, &congs, "cong");
    let eqangles = enumerate::all_eqangles(&mut proof);
    assert_sound(&mut proof, &eqangles, "eqangle");
    let eqratios = enumerate::all_eqratios(&mut proof);
    assert_sound(&mut proof, &eqratios, "eqratio");
    let midps = enumerate::all_midps(&proof);
    assert_sound(&mut proof, &midps, "midp");
    let circles = enumerate::all_circles(&proof);
    assert_sound(&mut proof, &circles, "circle");

    // The construction itself guarantees a few of these families exist.
    assert!(!midps.is_empty());
    assert!(!congs.is_empty());
    assert!(!paras.is_empty(), "the midline rules must fire");
}
