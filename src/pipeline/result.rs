//! Stage and pipeline outcomes.

use crate::error::Error;
use std::fmt;

/// The two stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Single-file compilation of the application
    Build,
    /// Binary virtualization of the build artifact
    Package,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Build => "build",
            StageKind::Package => "package",
        })
    }
}

/// Success or failure of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tool exited 0
    Success,
    /// The stage did not succeed
    Failure,
}

/// Why a stage failed.
///
/// Lets callers tell "the tool ran and reported an error" apart from "the tool never ran",
/// even when both surface the same exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The external tool ran and exited nonzero
    ToolExited,
    /// No candidate location for the tool exists; nothing was launched
    ToolNotFound,
    /// The tool was found but could not be launched
    LaunchFailed,
}

/// Normalized outcome of a single stage. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageResult {
    outcome: Outcome,
    code: i32,
    cause: Option<FailureCause>,
    message: Option<String>,
}

impl StageResult {
    /// A successful stage.
    pub fn success() -> Self {
        Self {
            outcome: Outcome::Success,
            code: 0,
            cause: None,
            message: None,
        }
    }

    /// Maps a tool's exit code verbatim: 0 is success, anything else is failure with that code.
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            return Self::success();
        }
        Self {
            outcome: Outcome::Failure,
            code,
            cause: Some(FailureCause::ToolExited),
            message: Some(format!("exited with code {code}")),
        }
    }

    /// A failure detected by the orchestrator itself.
    pub fn from_error(err: &Error) -> Self {
        let cause = match err {
            Error::ToolNotFound { .. } | Error::EmptyToolSpec(_) => FailureCause::ToolNotFound,
            Error::StageFailure { .. } => FailureCause::ToolExited,
            _ => FailureCause::LaunchFailed,
        };
        Self {
            outcome: Outcome::Failure,
            code: err.exit_code(),
            cause: Some(cause),
            message: Some(err.to_string()),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Exit code: 0 on success, the tool's exact code otherwise.
    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn cause(&self) -> Option<FailureCause> {
        self.cause
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Outcome of a full pipeline run.
///
/// `package` is `None` when the build failed and packaging never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    build: StageResult,
    package: Option<StageResult>,
}

impl PipelineResult {
    /// Build failed; packaging was skipped.
    pub fn halted(build: StageResult) -> Self {
        Self {
            build,
            package: None,
        }
    }

    /// Both stages ran.
    pub fn completed(build: StageResult, package: StageResult) -> Self {
        Self {
            build,
            package: Some(package),
        }
    }

    pub fn build(&self) -> &StageResult {
        &self.build
    }

    pub fn package(&self) -> Option<&StageResult> {
        self.package.as_ref()
    }

    /// Result of the stage that ran last, with the stage it belongs to.
    pub fn last(&self) -> (StageKind, &StageResult) {
        match &self.package {
            Some(package) => (StageKind::Package, package),
            None => (StageKind::Build, &self.build),
        }
    }

    pub fn is_success(&self) -> bool {
        self.last().1.is_success()
    }

    /// 0 if both stages succeeded, otherwise the failing stage's code.
    pub fn exit_code(&self) -> i32 {
        self.last().1.code()
    }

    /// The failing stage, if any.
    pub fn failed_stage(&self) -> Option<StageKind> {
        let (stage, result) = self.last();
        (!result.is_success()).then_some(stage)
    }
}
