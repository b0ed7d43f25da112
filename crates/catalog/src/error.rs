use std::path::PathBuf;

use crate::catalog::PatternKind;
use crate::pattern::PatternError;

/// Pattern catalog error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern failed to compile or the engine aborted a match
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Configuration could not be parsed or is invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Name does not refer to a catalog pattern
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),

    /// Pattern exists but the validator was built without it
    #[error("pattern not enabled: {0}")]
    PatternDisabled(PatternKind),
}

/// Result type using the catalog Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
