//! Error types for pipeline operations.
//!
//! Every error the orchestrator synthesizes itself maps to exit code 1. A stage whose
//! external tool ran and exited nonzero carries that tool's exact code instead.

use crate::pipeline::StageKind;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code used for every failure the orchestrator detects on its own.
pub const SYNTHETIC_EXIT_CODE: i32 = 1;

/// Main error type for all pipeline operations
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate location for a required tool exists
    #[error("{tool} not found (checked: {})", .checked.join(", "))]
    ToolNotFound {
        /// Logical tool name
        tool: String,
        /// Human-readable description of every probed location
        checked: Vec<String>,
    },

    /// A tool spec was built without any candidates
    #[error("tool spec `{0}` has no candidate locations")]
    EmptyToolSpec(String),

    /// The directory a stage must run in is missing
    #[error("working directory does not exist: {}", .path.display())]
    MissingWorkingDir {
        /// Directory that was expected
        path: PathBuf,
    },

    /// The external process could not be spawned or awaited
    #[error("failed to launch `{command}`: {error}")]
    CommandFailed {
        /// Program that was launched
        command: String,
        /// Underlying OS error
        #[source]
        error: io::Error,
    },

    /// An external tool ran and exited nonzero
    #[error("{stage} stage failed with exit code {code}")]
    StageFailure {
        /// Stage that failed
        stage: StageKind,
        /// Exit code reported by the tool
        code: i32,
    },

    /// Filesystem operation failed on a known path
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Process exit code this error should surface as.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::StageFailure { code, .. } => *code,
            _ => SYNTHETIC_EXIT_CODE,
        }
    }
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Attaches path context to raw IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with what was being done and to which path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::GenericError(format!($($arg)*)))
    };
}
