//! External tool discovery.
//!
//! A [`ToolSpec`] names a tool and lists where it may live. [`ToolLocator`] probes those
//! candidates lazily, in order, and stops at the first one that exists.

use crate::error::{Error, Result};
use path_absolutize::Absolutize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// One place a tool may be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// An explicit file path.
    Path(PathBuf),
    /// A path relative to the directory held in an environment variable.
    ///
    /// Absent when the variable is unset or empty.
    EnvRoot {
        /// Environment variable naming the install root
        var: String,
        /// Location of the tool below that root
        relative: PathBuf,
    },
    /// A program name looked up on `PATH`.
    SearchPath(String),
}

impl Candidate {
    /// Convenience constructor for [`Candidate::EnvRoot`].
    pub fn env_root(var: impl Into<String>, relative: impl Into<PathBuf>) -> Self {
        Candidate::EnvRoot {
            var: var.into(),
            relative: relative.into(),
        }
    }

    /// Returns the candidate's path if it exists right now.
    fn probe(&self) -> Option<PathBuf> {
        match self {
            Candidate::Path(path) => existing(path),
            Candidate::EnvRoot { var, relative } => {
                let root = std::env::var_os(var).filter(|v| !v.is_empty())?;
                existing(&Path::new(&root).join(relative))
            }
            Candidate::SearchPath(program) => which::which(program).ok(),
        }
    }
}

fn existing(path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        return None;
    }
    match path.absolutize() {
        Ok(abs) => Some(abs.into_owned()),
        Err(e) => {
            log::debug!("Cannot absolutize {}: {}", path.display(), e);
            Some(path.to_path_buf())
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Path(path) => write!(f, "{}", path.display()),
            Candidate::EnvRoot { var, relative } => {
                write!(f, "%{}%{}{}", var, std::path::MAIN_SEPARATOR, relative.display())
            }
            Candidate::SearchPath(program) => write!(f, "{program} on PATH"),
        }
    }
}

/// A required external tool and its candidate locations, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    name: String,
    candidates: Vec<Candidate>,
}

impl ToolSpec {
    /// Creates a spec. Fails if `candidates` is empty.
    pub fn new(name: impl Into<String>, candidates: Vec<Candidate>) -> Result<Self> {
        let name = name.into();
        if candidates.is_empty() {
            return Err(Error::EmptyToolSpec(name));
        }
        Ok(Self { name, candidates })
    }

    /// Logical tool name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidates in probe order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Resolves [`ToolSpec`]s to concrete executable paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolLocator;

impl ToolLocator {
    /// Returns the first existing candidate of `spec`.
    ///
    /// Only existence is checked. Later candidates are never probed once one matches.
    pub fn resolve(&self, spec: &ToolSpec) -> Result<PathBuf> {
        for candidate in spec.candidates() {
            match candidate.probe() {
                Some(path) => {
                    log::debug!("Found {} at: {}", spec.name(), path.display());
                    return Ok(path);
                }
                None => log::debug!("{} not at {}", spec.name(), candidate),
            }
        }

        Err(Error::ToolNotFound {
            tool: spec.name().to_string(),
            checked: spec.candidates().iter().map(ToString::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn empty_candidate_list_is_rejected() {
        let err = ToolSpec::new("packer console", vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptyToolSpec(name) if name == "packer console"));
    }

    #[test]
    fn local_override_wins_even_when_system_paths_exist() {
        let local = tempfile::tempdir().unwrap();
        let system64 = tempfile::tempdir().unwrap();
        let system32 = tempfile::tempdir().unwrap();
        let local_exe = touch(local.path(), "packer.exe");
        let sys64_exe = touch(system64.path(), "packer.exe");
        let sys32_exe = touch(system32.path(), "packer.exe");

        let spec = ToolSpec::new(
            "packer console",
            vec![
                Candidate::Path(local_exe.clone()),
                Candidate::Path(sys64_exe),
                Candidate::Path(sys32_exe),
            ],
        )
        .unwrap();

        assert_eq!(ToolLocator.resolve(&spec).unwrap(), local_exe);
    }

    #[test]
    fn falls_through_to_later_candidates_in_order() {
        let system64 = tempfile::tempdir().unwrap();
        let system32 = tempfile::tempdir().unwrap();
        let sys32_exe = touch(system32.path(), "packer.exe");

        let spec = ToolSpec::new(
            "packer console",
            vec![
                Candidate::Path(system64.path().join("missing.exe")),
                Candidate::Path(system64.path().join("packer.exe")),
                Candidate::Path(sys32_exe.clone()),
            ],
        )
        .unwrap();

        assert_eq!(ToolLocator.resolve(&spec).unwrap(), sys32_exe);
    }

    #[test]
    fn not_found_carries_tool_name_and_probed_locations() {
        let dir = tempfile::tempdir().unwrap();
        let spec = ToolSpec::new(
            "packer console",
            vec![
                Candidate::Path(dir.path().join("a.exe")),
                Candidate::env_root("BOXPACK_TEST_NEVER_SET", "Vendor/b.exe"),
            ],
        )
        .unwrap();

        match ToolLocator.resolve(&spec).unwrap_err() {
            Error::ToolNotFound { tool, checked } => {
                assert_eq!(tool, "packer console");
                assert_eq!(checked.len(), 2);
                assert!(checked[1].starts_with("%BOXPACK_TEST_NEVER_SET%"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn env_rooted_candidate_resolves_below_variable() {
        let root = tempfile::tempdir().unwrap();
        let exe = touch(root.path(), "Enigma Virtual Box/enigmavbconsole.exe");
        // SAFETY: serialised with every other test that touches the environment.
        unsafe { std::env::set_var("BOXPACK_TEST_PROGRAM_FILES", root.path()) };

        let spec = ToolSpec::new(
            "packer console",
            vec![Candidate::env_root(
                "BOXPACK_TEST_PROGRAM_FILES",
                "Enigma Virtual Box/enigmavbconsole.exe",
            )],
        )
        .unwrap();
        let resolved = ToolLocator.resolve(&spec);

        unsafe { std::env::remove_var("BOXPACK_TEST_PROGRAM_FILES") };
        assert_eq!(resolved.unwrap(), exe);
    }

    #[test]
    #[serial]
    fn empty_env_root_is_treated_as_absent() {
        unsafe { std::env::set_var("BOXPACK_TEST_EMPTY_ROOT", "") };
        let spec = ToolSpec::new(
            "packer console",
            vec![Candidate::env_root("BOXPACK_TEST_EMPTY_ROOT", "x.exe")],
        )
        .unwrap();
        let resolved = ToolLocator.resolve(&spec);
        unsafe { std::env::remove_var("BOXPACK_TEST_EMPTY_ROOT") };

        assert!(matches!(resolved, Err(Error::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn search_path_candidate_uses_path_lookup() {
        let spec = ToolSpec::new("shell", vec![Candidate::SearchPath("sh".into())]).unwrap();
        let path = ToolLocator.resolve(&spec).unwrap();
        assert!(path.is_absolute());
    }
}
