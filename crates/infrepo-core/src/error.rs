//! Error types for infrepo

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Error type for repository operations
///
/// Only startup and filesystem failures are represented here. Per-package
/// problems (missing icon entries, unparsable dump output) are logged and
/// never surface as a `RepoError`.
#[derive(Error, Debug)]
pub enum RepoError {
    /// The badging-dump executable does not exist or is not a file
    #[error("dump tool not found: {}", .0.display())]
    DumpToolNotFound(PathBuf),

    /// The working directory does not exist or is not a directory
    #[error("working directory not found: {}", .0.display())]
    WorkDirNotFound(PathBuf),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for RepoError {
    fn from(err: toml::de::Error) -> Self {
        RepoError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
