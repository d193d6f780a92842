//! Execution of a single external process.

use super::{StageResult, workdir::WorkingDirGuard};
use crate::error::{Error, Result};
use path_absolutize::Absolutize;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

/// One external process launch: program, positional arguments, working directory.
///
/// Each argument is handed to the OS as a single argv entry, so values containing spaces
/// are never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    program: PathBuf,
    args: Vec<OsString>,
    working_dir: PathBuf,
}

impl ProcessInvocation {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn display_command(&self) -> String {
        let mut command = self.program.display().to_string();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                command.push_str(&format!(" \"{arg}\""));
            } else {
                command.push(' ');
                command.push_str(&arg);
            }
        }
        command
    }
}

/// Runs [`ProcessInvocation`]s to completion and normalizes their exit status.
///
/// The child inherits stdin, stdout and stderr, so its diagnostics reach the user unbuffered
/// while it runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageRunner;

impl StageRunner {
    /// Runs the invocation and waits for it to exit.
    ///
    /// Exit code 0 is success; any other code is returned unchanged. Failures to start the
    /// process at all become a synthetic failure with code 1.
    pub async fn run(&self, invocation: &ProcessInvocation) -> StageResult {
        match self.execute(invocation).await {
            Ok(code) => StageResult::from_exit_code(code),
            Err(e) => {
                log::error!("{}", e);
                StageResult::from_error(&e)
            }
        }
    }

    async fn execute(&self, invocation: &ProcessInvocation) -> Result<i32> {
        let working_dir = invocation.working_dir.absolutize()?.into_owned();
        if !working_dir.is_dir() {
            return Err(Error::MissingWorkingDir { path: working_dir });
        }
        // Resolved before the directory switch so a relative program path keeps its meaning.
        let program = if invocation.program.components().count() > 1 {
            invocation.program.absolutize()?.into_owned()
        } else {
            invocation.program.clone()
        };

        let _guard = WorkingDirGuard::enter(&working_dir)?;

        log::info!("Running: {}", invocation.display_command());
        log::debug!("Working directory: {}", working_dir.display());

        let status = tokio::process::Command::new(&program)
            .args(&invocation.args)
            .current_dir(&working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: program.display().to_string(),
                error,
            })?;

        let code = exit_code(status);
        log::debug!("{} exited with code {}", program.display(), code);
        Ok(code)
    }
}

/// Exit code of a finished child.
///
/// A Unix child killed by a signal has no code; it is reported as `128 + signal`, the way
/// shells do.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
