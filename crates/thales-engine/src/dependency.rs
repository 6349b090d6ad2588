//! Dependencies: hyperedges carrying `(premises, reason, conclusion)`.

use std::fmt;
use std::sync::Arc;

use crate::statement::StatementId;

/// Reserved reason tag for axioms coming from the problem statement.
pub const IN_PREMISES: &str = "IN_PREMISES";
/// Reserved reason tag for facts accepted on numerical evidence alone.
pub const NUMERICAL_CHECK: &str = "NUMERICAL_CHECK";
/// Reserved reason tag for facts emitted while building the diagram.
pub const CONSTRUCTION: &str = "CONSTRUCTION";
/// Reserved reason tag for the Pythagorean verification predicates.
pub const PYTHAGORAS_VERIFICATION: &str = "Pythagoras Verification";

/// Justification label attached to a dependency.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reason {
    /// Axiom from the problem premises.
    InPremises,
    /// Accepted because numerically true, with no premises.
    NumericalCheck,
    /// Emitted during diagram construction.
    Construction,
    /// Verification tag of the Pythagorean predicates.
    PythagorasVerification,
    /// Derived by the angle table of the algebraic sub-engine.
    AngleChase,
    /// Derived by the ratio table of the algebraic sub-engine.
    RatioChase,
    /// Reconstructed from the defining sub-statements of a predicate.
    Definition(&'static str),
    /// A rule application; carries the rule description verbatim.
    Rule(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::InPremises => write!(f, "{IN_PREMISES}"),
            Reason::NumericalCheck => write!(f, "{NUMERICAL_CHECK}"),
            Reason::Construction => write!(f, "{CONSTRUCTION}"),
            Reason::PythagorasVerification => write!(f, "{PYTHAGORAS_VERIFICATION}"),
            Reason::AngleChase => write!(f, "Angle chasing (AR)"),
            Reason::RatioChase => write!(f, "Ratio chasing (AR)"),
            Reason::Definition(what) => write!(f, "Definition of {what}"),
            Reason::Rule(description) => write!(f, "{description}"),
        }
    }
}

/// One hyperedge of the dependency graph: the premises justify the
/// conclusion under the reason label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dependency {
    /// The concluded statement.
    pub statement: StatementId,
    /// Why the conclusion follows.
    pub reason: Reason,
    /// Statements the conclusion is derived from.
    pub premises: Arc<[StatementId]>,
}

impl Dependency {
    /// Creates a dependency from its parts.
    pub fn mk(statement: StatementId, reason: Reason, premises: &[StatementId]) -> Self {
        Self {
            statement,
            reason,
            premises: premises.into(),
        }
    }

    /// The same justification transplanted onto another conclusion.
    pub fn with_new(&self, statement: StatementId) -> Self {
        Self {
            statement,
            reason: self.reason.clone(),
            premises: Arc::clone(&self.premises),
        }
    }
}
