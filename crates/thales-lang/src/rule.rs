use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thales_core::{ErrorInfo, ThalesError};

use crate::sentence::Sentence;

/// One deduction rule: premise sentences over variables, conclusion
/// sentences over the same variables, and a human-readable description that
/// becomes the justification label of every application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    /// Description line, used verbatim as the dependency reason.
    pub description: String,
    /// Premises that must all hold for an instantiation.
    pub premises: Vec<Sentence>,
    /// Conclusions emitted for a surviving instantiation.
    pub conclusions: Vec<Sentence>,
}

impl Rule {
    /// Variables of the rule in order of first occurrence in the premises.
    pub fn variables(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for sentence in &self.premises {
            for arg in &sentence.args {
                if seen.insert(arg.clone()) {
                    ordered.push(arg.clone());
                }
            }
        }
        ordered
    }

    /// Parses a rule file: records of three lines (description, premises,
    /// conclusions) separated by blank lines. `#` starts a comment line.
    pub fn parse_text(text: &str) -> Result<Vec<Rule>, ThalesError> {
        let mut rules = Vec::new();
        let mut record: Vec<&str> = Vec::new();
        for line in text.lines().chain(std::iter::once("")) {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if line.is_empty() {
                if !record.is_empty() {
                    rules.push(Self::from_record(&record)?);
                    record.clear();
                }
                continue;
            }
            record.push(line);
        }
        Ok(rules)
    }

    fn from_record(record: &[&str]) -> Result<Rule, ThalesError> {
        if record.len() != 3 {
            return Err(ThalesError::Parse(
                ErrorInfo::new("rule-record-shape", "rule records have exactly three lines")
                    .with_context("lines", record.len())
                    .with_context("first", record.first().copied().unwrap_or_default()),
            ));
        }
        let description = record[0].to_string();
        let premises = parse_sentences(record[1], &description)?;
        let conclusions = parse_sentences(record[2], &description)?;
        let rule = Rule {
            description,
            premises,
            conclusions,
        };
        let bound: BTreeSet<String> = rule.variables().into_iter().collect();
        for conclusion in &rule.conclusions {
            for arg in &conclusion.args {
                if !bound.contains(arg) && !is_literal(arg) {
                    return Err(ThalesError::Parse(
                        ErrorInfo::new(
                            "rule-unbound-variable",
                            "conclusion variable never occurs in a premise",
                        )
                        .with_context("rule", &rule.description)
                        .with_context("variable", arg),
                    ));
                }
            }
        }
        Ok(rule)
    }
}

fn parse_sentences(line: &str, description: &str) -> Result<Vec<Sentence>, ThalesError> {
    line.split(',')
        .map(|part| {
            Sentence::from_text(part).ok_or_else(|| {
                ThalesError::Parse(
                    ErrorInfo::new("rule-empty-sentence", "empty sentence in rule")
                        .with_context("rule", description),
                )
            })
        })
        .collect()
}

/// Literal tokens (fractions, angle constants) are not variables.
fn is_literal(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let premises: Vec<String> = self.premises.iter().map(|s| s.to_string()).collect();
        let conclusions: Vec<String> = self.conclusions.iter().map(|s| s.to_string()).collect();
        write!(
            f,
            "{} => {}",
            premises.join(", "),
            conclusions.join(", ")
        )
    }
}
