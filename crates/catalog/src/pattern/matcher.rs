//! Compiled matchers anchored for full-string matching.

use fancy_regex::{Regex, RegexBuilder};

/// Backtracking step limit used when none is configured.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// A pattern compiled so that a match must span the whole candidate.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

/// Error during pattern compilation or matching.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[source] Box<fancy_regex::Error>),

    #[error("match aborted: {0}")]
    Match(#[source] Box<fancy_regex::Error>),
}

impl CompiledPattern {
    /// Compile a pattern string with the default backtrack limit.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_with_limit(pattern, DEFAULT_BACKTRACK_LIMIT)
    }

    /// Compile a pattern string, wrapping it as `^(?:pattern)$`.
    pub fn compile_with_limit(pattern: &str, backtrack_limit: usize) -> Result<Self, PatternError> {
        let anchored = anchor(pattern);
        let regex = RegexBuilder::new(&anchored)
            .backtrack_limit(backtrack_limit)
            .build()
            .map_err(|e| PatternError::InvalidRegex(Box::new(e)))?;

        tracing::debug!("compiled pattern {}", anchored);
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether the candidate matches from its first to its last character.
    ///
    /// Fails with [`PatternError::Match`] when the engine exceeds the
    /// backtrack limit. For the password pattern that happens on rejected
    /// candidates roughly as long as the limit, since each lookahead and the
    /// length check backtrack once per character.
    pub fn is_full_match(&self, candidate: &str) -> Result<bool, PatternError> {
        match self.regex.is_match(candidate) {
            Ok(matched) => {
                tracing::trace!("{:?} against {}: {}", candidate, self.source, matched);
                Ok(matched)
            }
            Err(e) => {
                tracing::warn!("matching {:?} against {} aborted: {}", candidate, self.source, e);
                Err(PatternError::Match(Box::new(e)))
            }
        }
    }

    /// The pattern as given, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The anchored form handed to the engine.
    pub fn anchored(&self) -> &str {
        self.regex.as_str()
    }
}

fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
