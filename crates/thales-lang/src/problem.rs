use serde::{Deserialize, Serialize};
use thales_core::{ErrorInfo, ThalesError};

use crate::sentence::Sentence;

/// One clause defining one or more points through one or more constructions.
///
/// Written `x y = name args, name args`; the left side lists the points the
/// clause introduces, the right side the constructions that pin them down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Points introduced by the clause, in declaration order.
    pub points: Vec<String>,
    /// Constructions constraining those points.
    pub constructions: Vec<Sentence>,
}

impl Clause {
    /// Parses a single clause such as `d = on_tline d b a c, on_tline d c a b`.
    pub fn from_text(text: &str) -> Result<Self, ThalesError> {
        let (points, constructions) = text.split_once('=').ok_or_else(|| {
            parse_error("clause-missing-equals", "clause lacks a `=` separator", text)
        })?;
        let points: Vec<String> = points.split_whitespace().map(str::to_string).collect();
        if points.is_empty() {
            return Err(parse_error(
                "clause-no-points",
                "clause declares no points",
                text,
            ));
        }
        let constructions = constructions
            .split(',')
            .map(|part| {
                Sentence::from_text(part).ok_or_else(|| {
                    parse_error("clause-empty-construction", "empty construction", text)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            points,
            constructions,
        })
    }
}

/// A full problem: an ordered list of clauses plus the goal sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Construction clauses in declaration order.
    pub clauses: Vec<Clause>,
    /// Goal statements to prove.
    pub goals: Vec<Sentence>,
}

impl Problem {
    /// Parses a problem of the form `clause; clause ? goal; goal`.
    pub fn from_text(text: &str) -> Result<Self, ThalesError> {
        let (construction, goals) = match text.split_once('?') {
            Some((construction, goals)) => (construction, goals),
            None => (text, ""),
        };
        let clauses = construction
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .map(Clause::from_text)
            .collect::<Result<Vec<_>, _>>()?;
        let goals = goals
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                Sentence::from_text(part)
                    .ok_or_else(|| parse_error("empty-goal", "empty goal sentence", text))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses, goals })
    }

    /// All point names declared by the problem, in declaration order.
    pub fn point_names(&self) -> Vec<String> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.points.iter().cloned())
            .collect()
    }
}

fn parse_error(code: &str, message: &str, text: &str) -> ThalesError {
    ThalesError::Parse(ErrorInfo::new(code, message).with_context("text", text.trim()))
}
