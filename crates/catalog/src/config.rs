// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validator configuration.
//!
//! Read from TOML, for example:
//!
//! ```toml
//! patterns = ["ipv4", "mobile_israeli"]
//! backtrack_limit = 100000
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::catalog::PatternKind;
use crate::error::{Error, Result};
use crate::pattern::DEFAULT_BACKTRACK_LIMIT;

/// Which patterns a validator compiles, and how hard the engine may try.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Enabled patterns. Duplicates are ignored.
    pub patterns: Vec<PatternKind>,

    /// Backtracking step limit passed to the regex engine.
    pub backtrack_limit: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            patterns: PatternKind::ALL.to_vec(),
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl ValidatorConfig {
    /// Reject settings no validator can be built from.
    pub fn validate(&self) -> Result<()> {
        self.check().map_err(|message| Error::Config {
            message,
            path: None,
        })
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.patterns.is_empty() {
            return Err("patterns must not be empty".to_string());
        }
        if self.backtrack_limit == 0 {
            return Err("backtrack_limit must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<ValidatorConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("loading config from {}", path.display());
    parse(&content, Some(path))
}

/// Parse configuration from string content.
pub fn parse(content: &str, path: Option<&Path>) -> Result<ValidatorConfig> {
    let config_error = |message: String| Error::Config {
        message,
        path: path.map(Path::to_path_buf),
    };

    let config: ValidatorConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    config.check().map_err(config_error)?;
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
