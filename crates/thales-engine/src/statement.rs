//! Statements: a predicate applied to canonicalized arguments, interned so
//! equality and hashing go through the canonical representation.

use indexmap::IndexMap;

use crate::frac::Frac;
use crate::symbols::PointId;

/// Closed set of predicates known to the engine.
///
/// Each predicate defines argument canonicalization, a numeric check, a
/// symbolic check, a symbolic add and a premise reconstruction; dispatch is
/// a match on this tag (see the `predicates` module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PredicateKind {
    /// Points on one line.
    Coll,
    /// Points on one circle.
    Cyclic,
    /// Two parallel lines, each given by a point pair.
    Para,
    /// Two perpendicular lines.
    Perp,
    /// Two congruent segments.
    Cong,
    /// Two equal angles, each given by a pair of lines.
    EqAngle,
    /// Two equal ratios, each given by a pair of segments.
    EqRatio,
    /// First point is the midpoint of the other two.
    Midp,
    /// First point is the center of the circle through the other three.
    Circle,
    /// Two similar triangles.
    Simtri,
    /// Constant angle between two lines, in units of pi.
    AConst,
    /// Constant segment length.
    LConst,
    /// Constant ratio between two segments.
    RConst,
    /// Numeric filter: points not collinear.
    Ncoll,
    /// Numeric filter: lines not parallel.
    Npara,
    /// Numeric filter: lines not perpendicular.
    Nperp,
    /// Numeric filter: distinct points.
    Diff,
    /// Right-triangle premises of the Pythagorean verification.
    PythagoreanPremises,
    /// Right-triangle conclusions of the Pythagorean verification.
    PythagoreanConclusions,
}

impl PredicateKind {
    /// Stable string key of the predicate.
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::Coll => "coll",
            PredicateKind::Cyclic => "cyclic",
            PredicateKind::Para => "para",
            PredicateKind::Perp => "perp",
            PredicateKind::Cong => "cong",
            PredicateKind::EqAngle => "eqangle",
            PredicateKind::EqRatio => "eqratio",
            PredicateKind::Midp => "midp",
            PredicateKind::Circle => "circle",
            PredicateKind::Simtri => "simtri",
            PredicateKind::AConst => "aconst",
            PredicateKind::LConst => "lconst",
            PredicateKind::RConst => "rconst",
            PredicateKind::Ncoll => "ncoll",
            PredicateKind::Npara => "npara",
            PredicateKind::Nperp => "nperp",
            PredicateKind::Diff => "diff",
            PredicateKind::PythagoreanPremises => "PythagoreanPremises",
            PredicateKind::PythagoreanConclusions => "PythagoreanConclusions",
        }
    }

    /// Resolves a predicate name; `None` for names outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "coll" => PredicateKind::Coll,
            "cyclic" => PredicateKind::Cyclic,
            "para" => PredicateKind::Para,
            "perp" => PredicateKind::Perp,
            "cong" => PredicateKind::Cong,
            "eqangle" => PredicateKind::EqAngle,
            "eqratio" => PredicateKind::EqRatio,
            "midp" => PredicateKind::Midp,
            "circle" => PredicateKind::Circle,
            "simtri" => PredicateKind::Simtri,
            "aconst" => PredicateKind::AConst,
            "lconst" => PredicateKind::LConst,
            "rconst" => PredicateKind::RConst,
            "ncoll" => PredicateKind::Ncoll,
            "npara" => PredicateKind::Npara,
            "nperp" => PredicateKind::Nperp,
            "diff" => PredicateKind::Diff,
            "PythagoreanPremises" => PredicateKind::PythagoreanPremises,
            "PythagoreanConclusions" => PredicateKind::PythagoreanConclusions,
            _ => return None,
        })
    }
}

/// One canonicalized argument of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arg {
    /// A point symbol.
    Point(PointId),
    /// An exact rational constant (angle fraction of pi, length, ratio).
    Value(Frac),
}

impl Arg {
    /// The point behind the argument; panics on value arguments, which
    /// canonicalization confines to the trailing slot of the `*const`
    /// predicates.
    pub(crate) fn point(&self) -> PointId {
        match self {
            Arg::Point(id) => *id,
            Arg::Value(_) => unreachable!("value argument where a point was canonicalized"),
        }
    }
}

/// Canonical content of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatementData {
    /// Predicate tag.
    pub kind: PredicateKind,
    /// Canonicalized arguments.
    pub args: Vec<Arg>,
}

/// Interned statement identifier; equality of ids is equality of canonical
/// representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementId(pub(crate) u32);

/// Intern table mapping canonical statement data to stable ids.
#[derive(Debug, Clone, Default)]
pub struct StatementTable {
    table: IndexMap<StatementData, ()>,
}

impl StatementTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a statement, returning its stable id.
    pub fn intern(&mut self, data: StatementData) -> StatementId {
        let (index, _) = self.table.insert_full(data, ());
        StatementId(index as u32)
    }

    /// Id of an already interned statement.
    pub fn lookup(&self, data: &StatementData) -> Option<StatementId> {
        self.table.get_index_of(data).map(|i| StatementId(i as u32))
    }

    /// The canonical data behind an id.
    pub fn data(&self, id: StatementId) -> &StatementData {
        self.table
            .get_index(id.0 as usize)
            .map(|(data, ())| data)
            .unwrap_or_else(|| unreachable!("statement ids are only minted by intern"))
    }

    /// Number of interned statements.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
