// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation against compiled catalog patterns.
//!
//! A [`Validator`] compiles each enabled pattern once and is immutable
//! afterwards, so one instance can be shared across threads.

use std::collections::BTreeMap;

use crate::catalog::PatternKind;
use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use crate::pattern::CompiledPattern;

/// Compiled catalog patterns keyed by kind.
#[derive(Debug, Clone)]
pub struct Validator {
    patterns: BTreeMap<PatternKind, CompiledPattern>,
}

impl Validator {
    /// Validator with every catalog pattern enabled.
    pub fn new() -> Result<Self> {
        Self::from_config(&ValidatorConfig::default())
    }

    /// Validator with the configured patterns enabled.
    ///
    /// Fails with [`Error::Config`] on an empty pattern list or a zero
    /// backtrack limit.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        config.validate()?;

        let mut patterns = BTreeMap::new();
        for &kind in &config.patterns {
            if patterns.contains_key(&kind) {
                continue;
            }
            let compiled =
                CompiledPattern::compile_with_limit(&kind.pattern(), config.backtrack_limit)?;
            patterns.insert(kind, compiled);
        }

        tracing::debug!(
            "validator ready with {} pattern(s): {:?}",
            patterns.len(),
            patterns.keys().collect::<Vec<_>>()
        );
        Ok(Self { patterns })
    }

    /// Whether `candidate` is a valid value of `kind`.
    ///
    /// See [`CompiledPattern::is_full_match`] for when matching aborts.
    pub fn is_valid(&self, kind: PatternKind, candidate: &str) -> Result<bool> {
        let pattern = self
            .patterns
            .get(&kind)
            .ok_or(Error::PatternDisabled(kind))?;
        Ok(pattern.is_full_match(candidate)?)
    }

    /// Every enabled kind that accepts `candidate`, in catalog order.
    pub fn matching_kinds(&self, candidate: &str) -> Result<Vec<PatternKind>> {
        let mut kinds = Vec::new();
        for (&kind, pattern) in &self.patterns {
            if pattern.is_full_match(candidate)? {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }

    /// Enabled kinds, in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = PatternKind> + '_ {
        self.patterns.keys().copied()
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
