//! Error type for a generation run

use infrepo_bundle::BundleError;
use infrepo_core::RepoError;
use thiserror::Error;

/// Result type alias for generation runs
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Fatal errors that stop a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Configuration, preflight or filesystem failure
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Manifest, hashing or bundle failure
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::Repo(RepoError::Io(err))
    }
}
