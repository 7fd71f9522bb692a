use std::path::PathBuf;

use malady_core::MaladyError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while loading or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A scenario file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A scenario document is not valid JSON for the expected shape.
    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// The actor or a condition failed validation.
    #[error(transparent)]
    Model(#[from] MaladyError),
}
