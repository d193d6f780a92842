//! Two-stage build-and-box pipeline.
//!
//! Compiles an application into a single standalone executable, then wraps that executable
//! and its resource files into a second self-contained executable using a binary
//! virtualization packer. Exit codes of both external tools are forwarded unchanged.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use error::{CliError, Error, Result};
