//! Build-then-box pipeline.
//!
//! The pipeline compiles the application into one executable, then wraps that executable and
//! its resources into a second, self-contained executable with a virtualization packer.
//!
//! # Module Organization
//!
//! - [`tool_locator`] - ordered candidate probing for external tools
//! - [`runner`] - launching one external process and normalizing its exit status
//! - [`workdir`] - scoped working directory switching
//! - [`stages`] - the build and packaging stages
//! - [`orchestrator`] - sequencing and short-circuiting
//! - [`settings`] - fixed file names and overridable locations
//! - [`checksum`] - artifact reporting

pub mod checksum;
pub mod orchestrator;
pub mod result;
pub mod runner;
pub mod settings;
pub mod stages;
pub mod tool_locator;
pub mod workdir;

pub use checksum::Artifact;
pub use orchestrator::{Pipeline, PipelineState};
pub use result::{FailureCause, Outcome, PipelineResult, StageKind, StageResult};
pub use runner::{ProcessInvocation, StageRunner};
pub use settings::{Settings, SettingsBuilder};
pub use stages::{BuildStage, PackagingStage, Stage};
pub use tool_locator::{Candidate, ToolLocator, ToolSpec};
pub use workdir::WorkingDirGuard;
