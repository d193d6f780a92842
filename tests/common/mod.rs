//! Shared helpers for integration tests.
//!
//! Stub tools are small `/bin/sh` scripts standing in for the compiler and the packer.

#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// A scratch project root plus a separate directory for stub tools.
pub struct Workspace {
    pub root: TempDir,
    pub tools: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create project root"),
            tools: tempfile::tempdir().expect("create tool dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn tools(&self) -> &Path {
        self.tools.path()
    }

    pub fn artifact(&self) -> PathBuf {
        self.root().join("dist/Hotkeys.exe")
    }

    pub fn boxed_artifact(&self) -> PathBuf {
        self.root().join("dist/Hotkeys_boxed.exe")
    }

    /// Log the packer stub appends one line to per invocation.
    pub fn packer_log(&self) -> PathBuf {
        self.tools().join("packer-calls.log")
    }

    pub fn packer_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.packer_log()) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Writes an executable shell script.
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create stub dir");
    }
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
    let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub");
    path
}

/// Compiler stub: writes `dist/Hotkeys.exe` relative to where it runs, then exits `code`.
pub fn compiler_stub(dir: &Path, code: i32) -> PathBuf {
    let body = if code == 0 {
        "mkdir -p dist && printf 'raw build' > dist/Hotkeys.exe\nexit 0".to_string()
    } else {
        format!("echo 'compile error' >&2\nexit {code}")
    };
    write_stub(dir, "pyinstaller", &body)
}

/// Compiler stub that succeeds without producing anything.
pub fn empty_compiler_stub(dir: &Path) -> PathBuf {
    write_stub(dir, "pyinstaller", "exit 0")
}

/// Packer stub: records `<cwd>|<args>` in `log`, writes the boxed artifact, exits `code`.
pub fn packer_stub(path: &Path, log: &Path, code: i32) -> PathBuf {
    let dir = path.parent().expect("stub parent");
    let name = path.file_name().expect("stub name").to_str().expect("utf-8 name");
    let body = format!(
        "echo \"$(pwd -P)|$*\" >> '{}'\nprintf 'boxed' > Hotkeys_boxed.exe\nexit {code}",
        log.display()
    );
    write_stub(dir, name, &body)
}
