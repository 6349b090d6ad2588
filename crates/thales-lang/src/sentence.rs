use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One predicate name applied to a sequence of argument tokens.
///
/// In a problem the tokens are concrete point names; in a rule they are
/// variables to be bound by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sentence {
    /// Predicate (or construction) name.
    pub name: String,
    /// Argument tokens.
    pub args: Vec<String>,
}

impl Sentence {
    /// Parses a sentence from whitespace separated tokens.
    ///
    /// Returns `None` for an empty token list.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace().map(str::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    /// The full token sequence, name first.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.args.len() + 1);
        tokens.push(self.name.clone());
        tokens.extend(self.args.iter().cloned());
        tokens
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Substitutes rule variables with bound point names.
///
/// Tokens absent from the mapping (numeric literals, angle fractions) pass
/// through unchanged.
pub fn translate_sentence(mapping: &BTreeMap<String, String>, sentence: &Sentence) -> Vec<String> {
    let mut tokens = Vec::with_capacity(sentence.args.len() + 1);
    tokens.push(sentence.name.clone());
    for arg in &sentence.args {
        tokens.push(mapping.get(arg).cloned().unwrap_or_else(|| arg.clone()));
    }
    tokens
}
