//! The dependency hypergraph: statements to the sets of hyperedges that
//! justify them. Edges are only ever added; multiple justifications for the
//! same statement are kept and the proof extractor picks the shortest.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::dependency::{Dependency, Reason};
use crate::statement::StatementId;

/// Map from statement to its incoming dependency hyperedges.
#[derive(Debug, Clone, Default)]
pub struct DependencyHypergraph {
    edges: IndexMap<StatementId, BTreeSet<Dependency>>,
}

impl DependencyHypergraph {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the statement is known (has an entry, possibly with no
    /// explicit edges when it was accepted by a symbolic check).
    pub fn is_known(&self, statement: StatementId) -> bool {
        self.edges.contains_key(&statement)
    }

    /// Whether this exact edge is recorded.
    pub fn has_edge(&self, dep: &Dependency) -> bool {
        self.edges
            .get(&dep.statement)
            .is_some_and(|set| set.contains(dep))
    }

    /// Marks a statement as known without attaching an edge.
    pub fn ensure_known(&mut self, statement: StatementId) {
        self.edges.entry(statement).or_default();
    }

    /// Inserts an edge, creating the conclusion entry when new. Returns
    /// whether the edge itself is new.
    pub fn add_edge(&mut self, dep: Dependency) -> bool {
        self.edges.entry(dep.statement).or_default().insert(dep)
    }

    /// Known statements in discovery order.
    pub fn statements(&self) -> impl Iterator<Item = StatementId> + '_ {
        self.edges.keys().copied()
    }

    /// Recorded justifications of a statement.
    pub fn edges_of(&self, statement: StatementId) -> Option<&BTreeSet<Dependency>> {
        self.edges.get(&statement)
    }

    /// Dependencies whose reason is `IN_PREMISES`, in discovery order.
    pub fn premises(&self) -> Vec<Dependency> {
        let mut result = Vec::new();
        for deps in self.edges.values() {
            for dep in deps {
                if dep.reason == Reason::InPremises {
                    result.push(dep.clone());
                }
            }
        }
        result
    }

    /// Number of known statements.
    pub fn statement_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}
