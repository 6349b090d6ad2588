#![deny(missing_docs)]
#![doc = "The deduction engine: symbol graph, canonical statements, predicate registry, dependency hypergraph, algebraic tables, rule matcher, saturation loop and proof extraction."]

pub mod algebra;
pub mod dependency;
pub mod engine;
pub mod enumerate;
pub mod frac;
pub mod hypergraph;
pub mod matcher;
pub mod outputs;
mod predicates;
pub mod proof;
pub mod statement;
pub mod symbols;

pub use dependency::{
    Dependency, Reason, CONSTRUCTION, IN_PREMISES, NUMERICAL_CHECK, PYTHAGORAS_VERIFICATION,
};
pub use engine::{run_loop, DdEngine, RunInfos};
pub use frac::Frac;
pub use hypergraph::DependencyHypergraph;
pub use matcher::Matcher;
pub use outputs::{dump_hypergraph, proof_deps, trace_partition, write_proof_steps, HypergraphDump};
pub use proof::ProofState;
pub use statement::{Arg, PredicateKind, StatementData, StatementId};
pub use symbols::{CircleId, LineId, PointId, SymbolsGraph};
