//! CLI-level errors (wrap core errors for display and exit codes)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::{BagError, TreeError};
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Bag(#[from] BagError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(TreeError::Malformed { .. }) => exitcode::DATAERR,
            CliError::Tree(_) | CliError::Bag(_) => exitcode::USAGE,
            CliError::Io { .. } => exitcode::IOERR,
        }
    }
}
