//! The algebraic sub-engine: linear tables over exact rationals with
//! witness tracking.
//!
//! Two instances back the predicates that reduce to linear constraints: an
//! angle table over line-direction variables (units of pi) and a ratio
//! table over log-length variables plus one variable per prime occurring in
//! a rational constant. Tables are monotone, closed under Gaussian
//! elimination, and every stored row carries the set of dependencies whose
//! equations combine into it, so `why_eq` can return the premises behind a
//! derived equality.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::dependency::Dependency;
use crate::frac::Frac;
use crate::symbols::{LineId, PointId};

/// Variable of the ratio table: the log-length of a segment, or the
/// logarithm of a prime factor of a rational constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RatioVar {
    /// Log-length of the segment between two points (ids ordered).
    Seg(PointId, PointId),
    /// Logarithm of a prime, decomposing rational length constants.
    Prime(u64),
}

impl RatioVar {
    /// Segment variable with canonical endpoint order.
    pub fn seg(a: PointId, b: PointId) -> Self {
        if a <= b {
            RatioVar::Seg(a, b)
        } else {
            RatioVar::Seg(b, a)
        }
    }
}

/// A linear combination of variables with rational coefficients.
pub type Combo<K> = BTreeMap<K, Frac>;

/// Outcome of inserting an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The equation extended the linear hull.
    Added,
    /// The equation was already implied by the hull.
    Redundant,
    /// The equation contradicts the hull; it is dropped with a warning
    /// (true facts never reach this branch).
    Inconsistent,
    /// Rational arithmetic overflowed; the equation is dropped.
    Overflow,
}

#[derive(Debug, Clone)]
struct Row<K> {
    combo: Combo<K>,
    constant: Frac,
    deps: BTreeSet<Dependency>,
}

/// Incremental Gaussian elimination over exact rationals.
///
/// Rows are kept fully reduced: each stored row owns exactly one pivot
/// variable (the smallest of its combination) and mentions no other pivot.
#[derive(Debug, Clone)]
pub struct LinearTable<K> {
    pivots: BTreeMap<K, Row<K>>,
}

impl<K: Ord + Clone + std::fmt::Debug> Default for LinearTable<K> {
    fn default() -> Self {
        Self {
            pivots: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone + std::fmt::Debug> LinearTable<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `combo = constant` justified by `dep`.
    pub fn add_eq(&mut self, combo: &[(K, Frac)], constant: Frac, dep: &Dependency) -> AddOutcome {
        let Some(combo) = collect_combo(combo) else {
            return AddOutcome::Overflow;
        };
        let mut deps = BTreeSet::new();
        deps.insert(dep.clone());
        let Some((combo, constant)) = self.reduce_row(combo, constant, &mut deps) else {
            return AddOutcome::Overflow;
        };
        if combo.is_empty() {
            if constant.is_zero() {
                return AddOutcome::Redundant;
            }
            warn!(constant = %constant, "dropping inconsistent equation");
            return AddOutcome::Inconsistent;
        }
        let Some((pivot, row)) = normalize_row(combo, constant, deps) else {
            return AddOutcome::Overflow;
        };
        if self.back_substitute(&pivot, &row).is_none() {
            return AddOutcome::Overflow;
        }
        self.pivots.insert(pivot, row);
        AddOutcome::Added
    }

    /// Decides whether `combo = constant` is implied by the recorded
    /// equations; on success returns the dependencies whose equations the
    /// derivation combines (the `why_eq` witness set).
    pub fn query_eq(&self, combo: &[(K, Frac)], constant: Frac) -> Option<BTreeSet<Dependency>> {
        let combo = collect_combo(combo)?;
        let mut deps = BTreeSet::new();
        let (combo, constant) = self.reduce_row(combo, constant, &mut deps)?;
        if combo.is_empty() && constant.is_zero() {
            Some(deps)
        } else {
            None
        }
    }

    /// Fully reduces a combination against the table, returning the
    /// residual combination, residual constant and contributing witnesses.
    /// Used by the enumerators to group derived-equal expressions.
    pub fn reduce(
        &self,
        combo: &[(K, Frac)],
        constant: Frac,
    ) -> Option<(Combo<K>, Frac, BTreeSet<Dependency>)> {
        let combo = collect_combo(combo)?;
        let mut deps = BTreeSet::new();
        let (combo, constant) = self.reduce_row(combo, constant, &mut deps)?;
        Some((combo, constant, deps))
    }

    fn reduce_row(
        &self,
        mut combo: Combo<K>,
        mut constant: Frac,
        deps: &mut BTreeSet<Dependency>,
    ) -> Option<(Combo<K>, Frac)> {
        loop {
            let Some((var, coeff)) = combo
                .iter()
                .find(|(var, _)| self.pivots.contains_key(*var))
                .map(|(var, coeff)| (var.clone(), *coeff))
            else {
                return Some((combo, constant));
            };
            let row = &self.pivots[&var];
            combo.remove(&var);
            for (other, other_coeff) in &row.combo {
                if *other == var {
                    continue;
                }
                let delta = coeff.checked_mul(other_coeff)?;
                merge_term(&mut combo, other.clone(), delta.neg())?;
            }
            constant = constant.checked_sub(&coeff.checked_mul(&row.constant)?)?;
            deps.extend(row.deps.iter().cloned());
        }
    }

    fn back_substitute(&mut self, pivot: &K, new_row: &Row<K>) -> Option<()> {
        let affected: Vec<K> = self
            .pivots
            .iter()
            .filter(|(_, row)| row.combo.contains_key(pivot))
            .map(|(key, _)| key.clone())
            .collect();
        for key in affected {
            let row = self.pivots.get(&key)?.clone();
            let coeff = row.combo[pivot];
            let mut combo = row.combo;
            combo.remove(pivot);
            for (other, other_coeff) in &new_row.combo {
                if other == pivot {
                    continue;
                }
                let delta = coeff.checked_mul(other_coeff)?;
                merge_term(&mut combo, other.clone(), delta.neg())?;
            }
            let constant = row
                .constant
                .checked_sub(&coeff.checked_mul(&new_row.constant)?)?;
            let mut deps = row.deps;
            deps.extend(new_row.deps.iter().cloned());
            self.pivots.insert(
                key,
                Row {
                    combo,
                    constant,
                    deps,
                },
            );
        }
        Some(())
    }
}

fn collect_combo<K: Ord + Clone>(terms: &[(K, Frac)]) -> Option<Combo<K>> {
    let mut combo = Combo::new();
    for (key, coeff) in terms {
        merge_term(&mut combo, key.clone(), *coeff)?;
    }
    Some(combo)
}

fn merge_term<K: Ord + Clone>(combo: &mut Combo<K>, key: K, delta: Frac) -> Option<()> {
    let current = combo.get(&key).copied().unwrap_or_else(Frac::zero);
    let next = current.checked_add(&delta)?;
    if next.is_zero() {
        combo.remove(&key);
    } else {
        combo.insert(key, next);
    }
    Some(())
}

fn normalize_row<K: Ord + Clone>(
    combo: Combo<K>,
    constant: Frac,
    deps: BTreeSet<Dependency>,
) -> Option<(K, Row<K>)> {
    let pivot = combo.keys().next()?.clone();
    let lead = combo[&pivot];
    let mut scaled = Combo::new();
    for (key, coeff) in combo {
        scaled.insert(key, coeff.checked_div(&lead)?);
    }
    let constant = constant.checked_div(&lead)?;
    Some((
        pivot,
        Row {
            combo: scaled,
            constant,
            deps,
        },
    ))
}

/// The angle table: variables are line symbols (union-find roots at the
/// time the variable was introduced), valued as directions in units of pi.
pub type AngleTable = LinearTable<LineId>;

/// The ratio table: variables are segment log-lengths and prime logs.
pub type RatioTable = LinearTable<RatioVar>;
