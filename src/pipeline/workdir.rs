//! Scoped switching of the process working directory.

use crate::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Switches the process working directory and switches it back when dropped.
///
/// Restoration happens on every exit path, including early returns and unwinding.
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    /// Records the current directory, then changes into `dir`.
    pub fn enter(dir: &Path) -> Result<Self> {
        let original = std::env::current_dir()?;
        std::env::set_current_dir(dir).fs_context("switching working directory to", dir)?;
        log::debug!("Entered {} (was {})", dir.display(), original.display());
        Ok(Self { original })
    }

    /// Directory that will be restored on drop.
    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.original) {
            log::error!(
                "Failed to restore working directory {}: {}",
                self.original.display(),
                e
            );
        }
    }
}
