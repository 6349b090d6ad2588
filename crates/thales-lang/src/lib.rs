#![deny(missing_docs)]
#![doc = "Text formulations consumed by the prover: construction clauses, goal sentences and deduction rules."]

mod problem;
mod rule;
mod sentence;

pub use problem::{Clause, Problem};
pub use rule::Rule;
pub use sentence::{translate_sentence, Sentence};

/// The default rule set shipped with the prover.
pub const DEFAULT_RULES: &str = include_str!("../rules/default.txt");
