//! Binary virtualization of the build artifact.

use super::Stage;
use crate::pipeline::{
    ProcessInvocation, Settings, StageKind, StageResult, StageRunner, ToolLocator, ToolSpec,
};
use std::{ffi::OsString, path::PathBuf};

/// Invokes the packer console from the build output directory.
///
/// The project descriptor refers to files relative to that directory, so the input and
/// output overrides are bare file names.
#[derive(Debug, Clone)]
pub struct PackagingStage {
    tool: ToolSpec,
    working_dir: PathBuf,
    args: Vec<OsString>,
}

impl PackagingStage {
    pub fn new(settings: &Settings) -> Self {
        let args = vec![
            settings.project_file().into_os_string(),
            OsString::from("-input"),
            OsString::from(settings.artifact_name()),
            OsString::from("-output"),
            OsString::from(settings.boxed_artifact_name()),
        ];

        Self {
            tool: settings.packer_tool().clone(),
            working_dir: settings.dist_dir(),
            args,
        }
    }

    /// Arguments passed to the packer, in order.
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> &std::path::Path {
        &self.working_dir
    }
}

impl Stage for PackagingStage {
    fn kind(&self) -> StageKind {
        StageKind::Package
    }

    async fn run(&self) -> StageResult {
        let program = match ToolLocator.resolve(&self.tool) {
            Ok(path) => path,
            Err(e) => {
                log::error!("{}. Place {} next to boxpack or install it.", e, self.tool.name());
                return StageResult::from_error(&e);
            }
        };

        log::info!("Boxing with {}", program.display());
        let invocation =
            ProcessInvocation::new(program, &self.working_dir).args(self.args.iter().cloned());
        StageRunner.run(&invocation).await
    }
}
