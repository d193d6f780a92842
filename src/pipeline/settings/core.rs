//! Core Settings struct and implementations.

use super::{
    BOXED_SUFFIX, BUILD_TOOL, DIST_DIR, ENTRY_SCRIPT, ICON_PATH, PACKER_EXE, PACKER_INSTALL_DIR,
    PRODUCT_NAME, PROGRAM_FILES_VAR, PROGRAM_FILES_X86_VAR, PROJECT_FILE, RESOURCE_FILE,
};
use crate::{
    error::Result,
    pipeline::{Candidate, ToolSpec},
};
use std::path::{Path, PathBuf};

/// Resolved configuration for one pipeline run, constructed via [`super::SettingsBuilder`].
///
/// # Examples
///
/// ```no_run
/// use boxpack::pipeline::SettingsBuilder;
///
/// # fn example() -> boxpack::Result<()> {
/// let settings = SettingsBuilder::new().root_dir("projects/hotkeys").build()?;
/// assert!(settings.artifact_path().ends_with("dist/Hotkeys.exe"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Absolute project root; the build stage runs here.
    root_dir: PathBuf,

    /// Compiler/bundler lookup.
    build_tool: ToolSpec,

    /// Packer lookup, local override first.
    packer_tool: ToolSpec,
}

impl Settings {
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn build_tool(&self) -> &ToolSpec {
        &self.build_tool
    }

    pub fn packer_tool(&self) -> &ToolSpec {
        &self.packer_tool
    }

    pub fn product_name(&self) -> &str {
        PRODUCT_NAME
    }

    pub fn entry_script(&self) -> &Path {
        Path::new(ENTRY_SCRIPT)
    }

    pub fn icon(&self) -> &Path {
        Path::new(ICON_PATH)
    }

    pub fn resource(&self) -> &Path {
        Path::new(RESOURCE_FILE)
    }

    /// Build output directory; the packaging stage runs here.
    pub fn dist_dir(&self) -> PathBuf {
        self.root_dir.join(DIST_DIR)
    }

    /// Absolute path of the packer project descriptor.
    pub fn project_file(&self) -> PathBuf {
        self.root_dir.join(PROJECT_FILE)
    }

    /// File name of the build artifact inside [`Self::dist_dir`].
    pub fn artifact_name(&self) -> String {
        format!("{PRODUCT_NAME}.exe")
    }

    /// File name of the boxed artifact inside [`Self::dist_dir`].
    pub fn boxed_artifact_name(&self) -> String {
        format!("{PRODUCT_NAME}{BOXED_SUFFIX}.exe")
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.dist_dir().join(self.artifact_name())
    }

    pub fn boxed_artifact_path(&self) -> PathBuf {
        self.dist_dir().join(self.boxed_artifact_name())
    }

    /// Compiler lookup: `PATH` only.
    pub fn default_build_tool() -> Result<ToolSpec> {
        ToolSpec::new(BUILD_TOOL, vec![Candidate::SearchPath(BUILD_TOOL.to_string())])
    }

    /// Packer lookup: `local_dir`, then the 64-bit and 32-bit Program Files installs.
    pub fn default_packer_tool(local_dir: &Path) -> Result<ToolSpec> {
        let installed = Path::new(PACKER_INSTALL_DIR).join(PACKER_EXE);
        ToolSpec::new(
            "packer console",
            vec![
                Candidate::Path(local_dir.join(PACKER_EXE)),
                Candidate::env_root(PROGRAM_FILES_VAR, installed.clone()),
                Candidate::env_root(PROGRAM_FILES_X86_VAR, installed),
            ],
        )
    }

    pub(super) fn new(root_dir: PathBuf, build_tool: ToolSpec, packer_tool: ToolSpec) -> Self {
        Self {
            root_dir,
            build_tool,
            packer_tool,
        }
    }
}
