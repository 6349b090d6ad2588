//! The proof state: one value owning the symbol graph, the statement
//! table, the dependency hypergraph, the algebraic tables and the goals.
//! All mutation is single-threaded; the saturation loop and the matcher
//! drive it one step at a time.

use thales_core::{ErrorInfo, ThalesError};
use thales_num::PointNum;

use crate::algebra::{AngleTable, RatioTable};
use crate::dependency::Dependency;
use crate::frac::Frac;
use crate::hypergraph::DependencyHypergraph;
use crate::predicates;
use crate::statement::{Arg, PredicateKind, StatementData, StatementId, StatementTable};
use crate::symbols::{LineId, PointId, SymbolsGraph};

/// Mutable deduction state of one solver run.
#[derive(Debug, Clone, Default)]
pub struct ProofState {
    /// Typed symbol nodes and their union-find state.
    pub symbols: SymbolsGraph,
    /// Interned canonical statements.
    pub statements: StatementTable,
    /// Statement-to-justifications hypergraph.
    pub hypergraph: DependencyHypergraph,
    /// Linear table over line directions (units of pi).
    pub angle_table: AngleTable,
    /// Linear table over segment log-lengths.
    pub ratio_table: RatioTable,
    /// Goal statements, in problem order.
    pub goals: Vec<StatementId>,
}

impl ProofState {
    /// Creates an empty proof state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses predicate tokens into an interned statement.
    ///
    /// `Ok(None)` flags a structurally illegal use (the matcher skips the
    /// binding); unknown predicate or point names are hard errors.
    pub fn statement_from_tokens(
        &mut self,
        tokens: &[String],
    ) -> Result<Option<StatementId>, ThalesError> {
        match self.canonical_data(tokens)? {
            Some(data) => Ok(Some(self.statements.intern(data))),
            None => Ok(None),
        }
    }

    /// Parses predicate tokens into canonical statement data without
    /// interning, so the matcher can numerically filter candidates before
    /// they enter the table.
    pub fn canonical_data(
        &self,
        tokens: &[String],
    ) -> Result<Option<StatementData>, ThalesError> {
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(None);
        };
        let kind = PredicateKind::from_name(name).ok_or_else(|| {
            ThalesError::Parse(
                ErrorInfo::new("unknown-predicate", "predicate name outside the closed set")
                    .with_context("name", name),
            )
        })?;
        let mut args = Vec::with_capacity(rest.len());
        for token in rest {
            if let Some(id) = self.symbols.point_by_name(token) {
                args.push(Arg::Point(id));
            } else if let Some(value) = Frac::parse_token(token) {
                args.push(Arg::Value(value));
            } else {
                return Err(ThalesError::Parse(
                    ErrorInfo::new("unknown-point", "token names no point in the graph")
                        .with_context("token", token),
                ));
            }
        }
        Ok(predicates::canonicalize(&self.symbols, kind, args)
            .map(|args| StatementData { kind, args }))
    }

    /// Canonicalizes and interns a statement built from in-engine args.
    /// `None` when the argument shape is illegal for the predicate.
    pub fn make_statement(
        &mut self,
        kind: PredicateKind,
        args: Vec<Arg>,
    ) -> Option<StatementId> {
        let args = predicates::canonicalize(&self.symbols, kind, args)?;
        Some(self.statements.intern(StatementData { kind, args }))
    }

    /// Canonical data behind an interned statement.
    pub fn data(&self, sid: StatementId) -> &StatementData {
        self.statements.data(sid)
    }

    /// Ground-truth test of a statement against the diagram coordinates.
    pub fn check_numerical(&self, sid: StatementId) -> bool {
        let data = self.data(sid).clone();
        self.check_numerical_data(&data)
    }

    /// Ground-truth test of canonical statement data.
    pub fn check_numerical_data(&self, data: &StatementData) -> bool {
        predicates::check_numerical(self, data)
    }

    /// Symbolic check: whether the statement is currently considered true.
    ///
    /// A statement already in the hypergraph is true. Otherwise it must be
    /// numerically sound and derivable from the symbolic state; a successful
    /// derivation marks the statement known (with no explicit edge — its
    /// justification is reconstructed lazily by `why`).
    pub fn check(&mut self, sid: StatementId) -> bool {
        if self.hypergraph.is_known(sid) {
            return true;
        }
        if !self.check_numerical(sid) {
            return false;
        }
        if predicates::check(self, sid) {
            self.hypergraph.ensure_known(sid);
            true
        } else {
            false
        }
    }

    /// Reconstructs the minimal dependency justifying a statement from the
    /// current symbolic state.
    pub fn why(&mut self, sid: StatementId) -> Option<Dependency> {
        predicates::why(self, sid)
    }

    /// Records a dependency symbolically: hypergraph edge plus the
    /// predicate's structural update. Returns whether the edge is new.
    pub fn add_dep(&mut self, dep: &Dependency) -> bool {
        predicates::add(self, dep)
    }

    /// Applies a candidate dependency from the matcher.
    ///
    /// The edge is accepted when it is not recorded yet, all premises
    /// symbolically check, and the conclusion itself is numerically sound
    /// (the last guard keeps invariant "every known statement is
    /// numerically true" even for rules whose modular angle semantics can
    /// alias). Returns whether anything new was recorded.
    pub fn apply_dep(&mut self, dep: &Dependency) -> bool {
        if self.hypergraph.has_edge(dep) {
            return false;
        }
        let premises: Vec<StatementId> = dep.premises.to_vec();
        for premise in premises {
            if !self.check(premise) {
                return false;
            }
        }
        if !self.check_numerical(dep.statement) {
            tracing::debug!(statement = %self.repr(dep.statement), "dropping numerically false conclusion");
            return false;
        }
        self.add_dep(dep)
    }

    /// Whether every goal currently checks.
    pub fn check_goals(&mut self) -> bool {
        let goals = self.goals.clone();
        goals.into_iter().all(|goal| self.check(goal))
    }

    /// Number of goals that currently check.
    pub fn goals_proven(&mut self) -> usize {
        let goals = self.goals.clone();
        goals.into_iter().filter(|goal| self.check(*goal)).count()
    }

    /// Canonical token representation, used for sorting and dumps.
    pub fn repr(&self, sid: StatementId) -> String {
        let data = self.data(sid);
        let mut out = data.kind.name().to_string();
        for arg in &data.args {
            out.push(' ');
            match arg {
                Arg::Point(id) => out.push_str(&self.symbols.point(*id).name),
                Arg::Value(value) => out.push_str(&value.to_string()),
            }
        }
        out
    }

    /// Human-readable rendering used in proof lines.
    pub fn pretty(&self, sid: StatementId) -> String {
        predicates::pretty(self, sid)
    }

    /// Representative line symbol through two points, created lazily.
    pub(crate) fn line_of(&mut self, a: PointId, b: PointId) -> LineId {
        let line = self.symbols.line_thru_pair(a, b);
        self.symbols.line_rep(line)
    }

    /// Direction of a line in units of pi, from the numeric diagram.
    pub(crate) fn line_dir(&self, line: LineId) -> f64 {
        self.symbols.line(line).num.direction_turns()
    }

    /// Coordinates of a point.
    pub(crate) fn point_num(&self, id: PointId) -> PointNum {
        self.symbols.point(id).num
    }
}
