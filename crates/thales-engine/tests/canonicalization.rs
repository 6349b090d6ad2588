use thales_engine::ProofState;
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn grid_state() -> ProofState {
    let mut proof = ProofState::new();
    let coords = [
        ("a", 0.0, 0.0),
        ("b", 1.0, 0.0),
        ("c", 0.0, 1.0),
        ("d", 1.0, 1.0),
        ("e", 2.0, 0.3),
        ("f", 0.3, 2.0),
        ("g", 1.7, 1.2),
        ("h", 0.6, 1.9),
    ];
    for (name, x, y) in coords {
        proof
            .symbols
            .add_point(name, PointNum::new(x, y), &[])
            .unwrap();
    }
    proof
}

#[test]
fn collinear_arguments_sort_by_name() {
    let mut proof = grid_state();
    let s1 = proof.statement_from_tokens(&toks("coll c a b")).unwrap().unwrap();
    let s2 = proof.statement_from_tokens(&toks("coll b c a")).unwrap().unwrap();
    assert_eq!(s1, s2);
    assert_eq!(proof.repr(s1), "coll a b c");
}

#[test]
fn canonicalization_is_idempotent() {
    let mut proof = grid_state();
    for text in [
        "coll c a b",
        "cyclic d c b a",
        "perp b d c a",
        "para d c b a",
        "cong c d a b",
        "eqangle a b c d e f g h",
        "midp a c b",
        "simtri a b e d c e",
        "aconst b a d c 1/3",
        "rconst c d a b 3/2",
    ] {
        let sid = proof.statement_from_tokens(&toks(text)).unwrap().unwrap();
        let repr = proof.repr(sid);
        let again = proof.statement_from_tokens(&toks(&repr)).unwrap().unwrap();
        assert_eq!(sid, again, "`{text}` reparsed as `{repr}`");
    }
}

#[test]
fn perpendicular_pairs_sort_internally_and_as_pairs() {
    let mut proof = grid_state();
    let s1 = proof.statement_from_tokens(&toks("perp b d c a")).unwrap().unwrap();
    assert_eq!(proof.repr(s1), "perp a c b d");
    let s2 = proof.statement_from_tokens(&toks("perp a c d b")).unwrap().unwrap();
    assert_eq!(s1, s2);
}

#[test]
fn equal_angles_unify_their_symmetric_presentations() {
    let mut proof = grid_state();
    let base = proof
        .statement_from_tokens(&toks("eqangle a b c d e f g h"))
        .unwrap()
        .unwrap();
    for variant in [
        "eqangle e f g h a b c d", // swap the two angles
        "eqangle c d a b g h e f", // negate both sides
        "eqangle b a d c f e h g", // reverse every pair
        "eqangle a b e f c d g h", // exchange the middle pairs
    ] {
        let sid = proof.statement_from_tokens(&toks(variant)).unwrap().unwrap();
        assert_eq!(base, sid, "variant `{variant}`");
    }
}

#[test]
fn similar_triangles_unify_their_relabelings() {
    let mut proof = grid_state();
    let base = proof
        .statement_from_tokens(&toks("simtri a b e d c e"))
        .unwrap()
        .unwrap();
    for variant in ["simtri b e a c e d", "simtri d c e a b e", "simtri e a b e d c"] {
        let sid = proof.statement_from_tokens(&toks(variant)).unwrap().unwrap();
        assert_eq!(base, sid, "variant `{variant}`");
    }
}

#[test]
fn illegal_shapes_produce_no_statement() {
    let mut proof = grid_state();
    for text in [
        "cyclic a b c",         // too few points
        "cyclic a b c c",       // duplicate point
        "coll a a b",           // duplicate point
        "para a b a b",         // a line is not parallel to itself
        "perp a b b a",         // degenerate pair
        "eqangle a b a b c d e f", // equal lines within one angle
        "midp a a b",           // midpoint of a degenerate segment
        "simtri a b c a b c",   // identical correspondence
        "lconst a b 0",         // lengths are positive
    ] {
        let parsed = proof.statement_from_tokens(&toks(text)).unwrap();
        assert!(parsed.is_none(), "`{text}` should be illegal");
    }
}

#[test]
fn unknown_points_and_predicates_are_hard_errors() {
    let mut proof = grid_state();
    assert!(proof.statement_from_tokens(&toks("coll a b zz")).is_err());
    assert!(proof.statement_from_tokens(&toks("nonsense a b c")).is_err());
}
