//! The two pipeline stages.
//!
//! - `build` - single-file compilation of the application
//! - `package` - binary virtualization of the build artifact

mod build;
mod package;

pub use build::BuildStage;
pub use package::PackagingStage;

use super::{StageKind, StageResult};

/// One discrete external-tool invocation with its own outcome.
///
/// Stages never return `Err`: resolution and launch problems are folded into a failed
/// [`StageResult`] so the pipeline sees a single shape for every outcome.
#[allow(async_fn_in_trait)]
pub trait Stage {
    /// Which stage this is.
    fn kind(&self) -> StageKind;

    /// Runs the stage to completion.
    async fn run(&self) -> StageResult;
}
