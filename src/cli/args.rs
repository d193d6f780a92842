//! Command line argument parsing and validation.

use crate::{
    error::Result,
    pipeline::{Settings, SettingsBuilder},
};
use clap::Parser;
use std::path::PathBuf;

/// Build-then-box pipeline for the hotkeys application
#[derive(Parser, Debug)]
#[command(
    name = "boxpack",
    version,
    about = "Compiles the application into one executable, then boxes it with the virtualization packer",
    long_about = "Compiles the application into a single-file executable, then wraps it and its
resources into a self-contained executable with the Enigma Virtual Box console.

Runs with no arguments from the project root:
  boxpack

Stage 1 runs pyinstaller from the project root and writes dist/Hotkeys.exe.
Stage 2 runs enigmavbconsole.exe from dist/ and writes dist/Hotkeys_boxed.exe.

The exit code is 0 when both stages succeed, the failing tool's own exit code otherwise,
or 1 when a required tool could not be found."
)]
pub struct Args {
    /// Project root containing main.py, the icon, the resource file and hotkeys.evb
    #[arg(short, long, value_name = "DIR", env = "BOXPACK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory checked for a local enigmavbconsole.exe before Program Files
    ///
    /// Defaults to the directory containing the boxpack executable.
    #[arg(long, value_name = "DIR", env = "BOXPACK_PACKER_DIR")]
    pub packer_dir: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.root.is_dir() {
            return Err(format!(
                "Project root {} is not a directory",
                self.root.display()
            ));
        }
        Ok(())
    }

    /// Pipeline settings described by these arguments.
    pub fn settings(&self) -> Result<Settings> {
        let mut builder = SettingsBuilder::new().root_dir(&self.root);
        if let Some(dir) = &self.packer_dir {
            builder = builder.packer_dir(dir);
        }
        builder.build()
    }
}
