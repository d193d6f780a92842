//! Builder for constructing Settings.

use super::Settings;
use crate::{bail, error::Result, pipeline::ToolSpec};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Fluent builder for [`Settings`].
///
/// Every field is optional; [`SettingsBuilder::build`] fills in the defaults.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    root_dir: Option<PathBuf>,
    packer_dir: Option<PathBuf>,
    build_tool: Option<ToolSpec>,
    packer_tool: Option<ToolSpec>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// Default: the current directory
    pub fn root_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory checked first for a local packer copy.
    ///
    /// Default: the directory containing the running executable
    pub fn packer_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.packer_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the compiler lookup entirely.
    pub fn build_tool(mut self, spec: ToolSpec) -> Self {
        self.build_tool = Some(spec);
        self
    }

    /// Replaces the packer lookup entirely. Takes precedence over [`Self::packer_dir`].
    pub fn packer_tool(mut self, spec: ToolSpec) -> Self {
        self.packer_tool = Some(spec);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Fails if the root cannot be made absolute or the running executable's directory
    /// cannot be determined when no packer directory was given.
    pub fn build(self) -> Result<Settings> {
        let root_dir = self.root_dir.unwrap_or_else(|| PathBuf::from("."));
        let root_dir = root_dir.absolutize()?.into_owned();

        let build_tool = match self.build_tool {
            Some(spec) => spec,
            None => Settings::default_build_tool()?,
        };

        let packer_tool = match self.packer_tool {
            Some(spec) => spec,
            None => {
                let packer_dir = match self.packer_dir {
                    Some(dir) => dir.absolutize()?.into_owned(),
                    None => executable_dir()?,
                };
                Settings::default_packer_tool(&packer_dir)?
            }
        };

        Ok(Settings::new(root_dir, build_tool, packer_tool))
    }
}

/// Directory holding the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let Some(dir) = exe.parent() else {
        bail!("{} has no parent directory", exe.display());
    };
    Ok(dir.to_path_buf())
}
