use std::collections::BTreeSet;

use thales_engine::algebra::{AddOutcome, LinearTable, RatioVar};
use thales_engine::{Dependency, Frac, ProofState, Reason};
use thales_num::PointNum;

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// A few interned statements to carry witness identity in table tests.
fn carriers(n: usize) -> Vec<Dependency> {
    let mut proof = ProofState::new();
    let names = ["a", "b", "c", "d", "e", "f"];
    for (i, name) in names.iter().enumerate() {
        proof
            .symbols
            .add_point(name, PointNum::new(i as f64, (i * i) as f64), &[])
            .unwrap();
    }
    (0..n)
        .map(|i| {
            let sid = proof
                .statement_from_tokens(&toks(&format!("diff {} {}", names[i], names[i + 1])))
                .unwrap()
                .unwrap();
            Dependency::mk(sid, Reason::InPremises, &[])
        })
        .collect()
}

fn var(p: u64) -> RatioVar {
    RatioVar::Prime(p)
}

fn one() -> Frac {
    Frac::one()
}

#[test]
fn chained_equalities_resolve_with_their_witnesses() {
    let deps = carriers(2);
    let mut table: LinearTable<RatioVar> = LinearTable::new();
    assert_eq!(
        table.add_eq(&[(var(2), one()), (var(3), one().neg())], Frac::zero(), &deps[0]),
        AddOutcome::Added
    );
    assert_eq!(
        table.add_eq(&[(var(3), one()), (var(5), one().neg())], Frac::zero(), &deps[1]),
        AddOutcome::Added
    );

    let witnesses = table
        .query_eq(&[(var(2), one()), (var(5), one().neg())], Frac::zero())
        .expect("transitive equality must be derivable");
    let expected: BTreeSet<Dependency> = deps.iter().cloned().collect();
    assert_eq!(witnesses, expected);

    assert!(table
        .query_eq(&[(var(2), one()), (var(5), one().neg())], Frac::one())
        .is_none());
    assert!(table
        .query_eq(&[(var(2), one()), (var(7), one().neg())], Frac::zero())
        .is_none());
}

#[test]
fn redundant_and_inconsistent_equations_are_reported() {
    let deps = carriers(3);
    let mut table: LinearTable<RatioVar> = LinearTable::new();
    table.add_eq(&[(var(2), one()), (var(3), one().neg())], Frac::zero(), &deps[0]);
    table.add_eq(&[(var(3), one()), (var(5), one().neg())], Frac::zero(), &deps[1]);
    assert_eq!(
        table.add_eq(&[(var(2), one()), (var(5), one().neg())], Frac::zero(), &deps[2]),
        AddOutcome::Redundant
    );
    assert_eq!(
        table.add_eq(&[(var(2), one()), (var(5), one().neg())], Frac::one(), &deps[2]),
        AddOutcome::Inconsistent
    );
}

#[test]
fn scaled_equations_divide_exactly() {
    // The excenter mechanism: from 2x - 2y = 1 the half difference
    // x - y = 1/2 must be derivable.
    let deps = carriers(1);
    let mut table: LinearTable<RatioVar> = LinearTable::new();
    let two = Frac::from_int(2);
    assert_eq!(
        table.add_eq(&[(var(2), two), (var(3), two.neg())], Frac::one(), &deps[0]),
        AddOutcome::Added
    );
    let witnesses = table
        .query_eq(
            &[(var(2), one()), (var(3), one().neg())],
            Frac::new(1, 2).unwrap(),
        )
        .expect("halved equation must be derivable");
    assert_eq!(witnesses.len(), 1);
}

#[test]
fn duplicate_terms_cancel_before_reduction() {
    let deps = carriers(1);
    let mut table: LinearTable<RatioVar> = LinearTable::new();
    // x - x = 0 is vacuous and must not pollute the table.
    assert_eq!(
        table.add_eq(&[(var(2), one()), (var(2), one().neg())], Frac::zero(), &deps[0]),
        AddOutcome::Redundant
    );
    // A query over an unknown variable is not derivable.
    assert!(table.query_eq(&[(var(11), one())], Frac::zero()).is_none());
    // ... but the empty combination trivially is.
    assert!(table
        .query_eq(&[(var(11), one()), (var(11), one().neg())], Frac::zero())
        .is_some());
}
