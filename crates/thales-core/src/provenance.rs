//! Provenance descriptors attached to solver run artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provenance information recorded alongside run infos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Hash of the problem text the run operated on.
    pub problem_hash: String,
    /// Hash of the rule set the run operated on.
    pub rules_hash: String,
    /// Master deterministic seed used for diagram sampling.
    pub seed: u64,
    /// ISO-8601 timestamp recording when the artifact was generated.
    pub created_at: String,
    /// Version map for the tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
