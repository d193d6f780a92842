//! Single-file compilation of the application.

use super::Stage;
use crate::pipeline::{
    ProcessInvocation, Settings, StageKind, StageResult, StageRunner, ToolLocator, ToolSpec,
};
use std::{ffi::OsString, path::PathBuf};

/// Separator between source and destination in `--add-data`.
const ADD_DATA_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Invokes the compiler/bundler from the project root with a fixed option set.
///
/// A failed build leaves whatever partial output the tool wrote; the next run overwrites it.
#[derive(Debug, Clone)]
pub struct BuildStage {
    tool: ToolSpec,
    working_dir: PathBuf,
    args: Vec<OsString>,
}

impl BuildStage {
    pub fn new(settings: &Settings) -> Self {
        let mut add_data = settings.resource().as_os_str().to_os_string();
        add_data.push(ADD_DATA_SEPARATOR);
        add_data.push(".");

        let args = vec![
            OsString::from("--noconfirm"),
            OsString::from("--onefile"),
            OsString::from("--noconsole"),
            OsString::from("--icon"),
            settings.icon().as_os_str().to_os_string(),
            OsString::from("--name"),
            OsString::from(settings.product_name()),
            OsString::from("--add-data"),
            add_data,
            settings.entry_script().as_os_str().to_os_string(),
        ];

        Self {
            tool: settings.build_tool().clone(),
            working_dir: settings.root_dir().to_path_buf(),
            args,
        }
    }

    /// Arguments passed to the compiler, in order.
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> &std::path::Path {
        &self.working_dir
    }
}

impl Stage for BuildStage {
    fn kind(&self) -> StageKind {
        StageKind::Build
    }

    async fn run(&self) -> StageResult {
        log::info!("Building single-file executable in {}", self.working_dir.display());

        let program = match ToolLocator.resolve(&self.tool) {
            Ok(path) => path,
            Err(e) => {
                log::error!("{}", e);
                return StageResult::from_error(&e);
            }
        };

        let invocation =
            ProcessInvocation::new(program, &self.working_dir).args(self.args.iter().cloned());
        StageRunner.run(&invocation).await
    }
}
