//! The rule matcher: enumerates variable-to-point bindings premise by
//! premise, filters them against the numeric diagram, and memoizes the
//! surviving candidate dependencies per rule.
//!
//! The initial enumeration is the dominant cost (`O(P^k)` for `k`
//! variables); bindings are assigned in premise order so every premise
//! prunes as soon as its variables are bound. An optional on-disk cache
//! persists successful bindings per rule across runs; entries are always
//! re-checked against the current diagram, so a stale cache is a pure
//! optimization, never a soundness hazard.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use thales_lang::{translate_sentence, Rule};

use crate::dependency::{Dependency, Reason};
use crate::proof::ProofState;
use crate::statement::StatementId;

type Binding = BTreeMap<String, String>;
type DiskCache = BTreeMap<String, BTreeMap<String, Vec<Binding>>>;

const CACHE_SECTION: &str = "matcher";

/// Memoizing matcher over a proof state.
#[derive(Debug, Default)]
pub struct Matcher {
    cache: BTreeMap<String, Vec<Dependency>>,
    runtime_cache_path: Option<PathBuf>,
}

impl Matcher {
    /// Creates a matcher, optionally backed by an on-disk binding cache.
    pub fn new(runtime_cache_path: Option<PathBuf>) -> Self {
        Self {
            cache: BTreeMap::new(),
            runtime_cache_path,
        }
    }

    /// Drops all memoized matches (needed only if points were added).
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// All currently applicable instantiations of the rule: memoized
    /// candidates whose conclusion is not yet known and whose premises all
    /// symbolically check.
    pub fn match_rule(&mut self, proof: &mut ProofState, rule: &Rule) -> Vec<Dependency> {
        if !self.cache.contains_key(&rule.description) {
            self.cache_rule(proof, rule);
        }
        let candidates = self
            .cache
            .get(&rule.description)
            .cloned()
            .unwrap_or_default();
        candidates
            .into_iter()
            .filter(|dep| {
                if proof.hypergraph.is_known(dep.statement) {
                    return false;
                }
                dep.premises.to_vec().iter().all(|p| proof.check(*p))
            })
            .collect()
    }

    fn cache_rule(&mut self, proof: &mut ProofState, rule: &Rule) {
        let rule_key = rule.to_string();
        let mut disk = self.read_disk_cache();
        let cached_bindings = disk
            .as_ref()
            .and_then(|cache| cache.get(CACHE_SECTION))
            .and_then(|section| section.get(&rule_key))
            .cloned();
        let from_disk = cached_bindings.is_some();

        let mut found: BTreeSet<Dependency> = BTreeSet::new();
        let mut successful: Vec<Binding> = Vec::new();
        match cached_bindings {
            Some(bindings) => {
                for binding in bindings {
                    self.try_binding(proof, rule, &binding, &mut found);
                }
            }
            None => {
                let points = proof.symbols.point_names_sorted();
                let mut binding = Binding::new();
                self.enumerate(
                    proof,
                    rule,
                    &points,
                    0,
                    &mut binding,
                    &mut Vec::new(),
                    &mut found,
                    &mut successful,
                );
            }
        }

        let mut deps: Vec<Dependency> = found.into_iter().collect();
        deps.sort_by_key(|dep| dependency_repr(proof, dep));
        debug!(
            rule = %rule.description,
            matches = deps.len(),
            from_disk,
            "rule matching cached"
        );
        self.cache.insert(rule.description.clone(), deps);

        if !from_disk {
            if let Some(cache) = disk.as_mut() {
                cache
                    .entry(CACHE_SECTION.to_string())
                    .or_default()
                    .insert(rule_key, successful);
                self.write_disk_cache(cache);
            }
        }
    }

    /// Depth-first assignment of rule variables in premise order; every
    /// fully bound premise is parsed and numerically checked before any
    /// deeper variable is touched.
    #[allow(clippy::too_many_arguments)]
    fn enumerate(
        &self,
        proof: &mut ProofState,
        rule: &Rule,
        points: &[String],
        premise_idx: usize,
        binding: &mut Binding,
        why: &mut Vec<StatementId>,
        found: &mut BTreeSet<Dependency>,
        successful: &mut Vec<Binding>,
    ) {
        if premise_idx == rule.premises.len() {
            successful.push(binding.clone());
            self.emit_conclusions(proof, rule, binding, why, found);
            return;
        }
        let premise = &rule.premises[premise_idx];
        let mut unbound: Vec<String> = Vec::new();
        for arg in &premise.args {
            if !binding.contains_key(arg) && !unbound.contains(arg) && !is_literal(arg) {
                unbound.push(arg.clone());
            }
        }
        self.assign(
            proof,
            rule,
            points,
            premise_idx,
            &unbound,
            0,
            binding,
            why,
            found,
            successful,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn assign(
        &self,
        proof: &mut ProofState,
        rule: &Rule,
        points: &[String],
        premise_idx: usize,
        unbound: &[String],
        var_idx: usize,
        binding: &mut Binding,
        why: &mut Vec<StatementId>,
        found: &mut BTreeSet<Dependency>,
        successful: &mut Vec<Binding>,
    ) {
        if var_idx == unbound.len() {
            let premise = &rule.premises[premise_idx];
            let tokens = translate_sentence(binding, premise);
            let Ok(Some(data)) = proof.canonical_data(&tokens) else {
                return;
            };
            if !proof.check_numerical_data(&data) {
                return;
            }
            let sid = proof.statements.intern(data);
            why.push(sid);
            self.enumerate(
                proof,
                rule,
                points,
                premise_idx + 1,
                binding,
                why,
                found,
                successful,
            );
            why.pop();
            return;
        }
        let var = &unbound[var_idx];
        for point in points {
            binding.insert(var.clone(), point.clone());
            self.assign(
                proof,
                rule,
                points,
                premise_idx,
                unbound,
                var_idx + 1,
                binding,
                why,
                found,
                successful,
            );
        }
        binding.remove(var);
    }

    fn try_binding(
        &self,
        proof: &mut ProofState,
        rule: &Rule,
        binding: &Binding,
        found: &mut BTreeSet<Dependency>,
    ) {
        let mut why = Vec::new();
        for premise in &rule.premises {
            let tokens = translate_sentence(binding, premise);
            let Ok(Some(data)) = proof.canonical_data(&tokens) else {
                return;
            };
            if !proof.check_numerical_data(&data) {
                return;
            }
            why.push(proof.statements.intern(data));
        }
        self.emit_conclusions(proof, rule, binding, &why, found);
    }

    fn emit_conclusions(
        &self,
        proof: &mut ProofState,
        rule: &Rule,
        binding: &Binding,
        why: &[StatementId],
        found: &mut BTreeSet<Dependency>,
    ) {
        for conclusion in &rule.conclusions {
            let tokens = translate_sentence(binding, conclusion);
            let Ok(Some(sid)) = proof.statement_from_tokens(&tokens) else {
                continue;
            };
            found.insert(Dependency::mk(
                sid,
                Reason::Rule(rule.description.clone()),
                why,
            ));
        }
    }

    fn read_disk_cache(&self) -> Option<DiskCache> {
        let path = self.runtime_cache_path.as_ref()?;
        if !path.exists() {
            return Some(DiskCache::new());
        }
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(cache) => Some(cache),
                Err(err) => {
                    warn!(%err, "unreadable matcher cache; ignoring it");
                    Some(DiskCache::new())
                }
            },
            Err(err) => {
                warn!(%err, "failed to read matcher cache; ignoring it");
                Some(DiskCache::new())
            }
        }
    }

    fn write_disk_cache(&self, cache: &DiskCache) {
        let Some(path) = self.runtime_cache_path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(%err, "failed to create matcher cache directory");
                return;
            }
        }
        match serde_json::to_string(cache) {
            Ok(text) => {
                if let Err(err) = fs::write(path, text) {
                    warn!(%err, "failed to write matcher cache");
                }
            }
            Err(err) => warn!(%err, "failed to serialize matcher cache"),
        }
    }
}

fn is_literal(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Stable rendering used to order matched dependencies.
pub(crate) fn dependency_repr(proof: &ProofState, dep: &Dependency) -> String {
    let premises: Vec<String> = dep.premises.iter().map(|p| proof.repr(*p)).collect();
    format!(
        "{} <= {} ({})",
        proof.repr(dep.statement),
        premises.join(", "),
        dep.reason
    )
}
