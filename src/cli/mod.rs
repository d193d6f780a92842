//! Command line interface for boxpack.

mod args;

pub use args::Args;

use crate::{
    error::{CliError, Error, Result},
    pipeline::{Artifact, FailureCause, Pipeline, PipelineResult, Settings},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Runs the pipeline for already-parsed arguments and returns the process exit code.
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let settings = args.settings()?;

    let mut pipeline = Pipeline::from_settings(&settings);
    let result = pipeline.run().await;

    if result.is_success() {
        report_artifacts(&settings).await;
    } else {
        eprintln!("{}", failure_line(&result));
    }

    Ok(result.exit_code())
}

/// One-line diagnostic naming the failing stage and its code.
fn failure_line(result: &PipelineResult) -> String {
    let (stage, last) = result.last();
    let failure = Error::StageFailure {
        stage,
        code: last.code(),
    };
    match (last.cause(), last.message()) {
        (Some(FailureCause::ToolExited), _) | (_, None) => failure.to_string(),
        (_, Some(message)) => format!("{failure}: {message}"),
    }
}

async fn report_artifacts(settings: &Settings) {
    for path in [settings.artifact_path(), settings.boxed_artifact_path()] {
        match Artifact::inspect(&path).await {
            Ok(artifact) => {
                println!("{} ({} bytes)", artifact.path.display(), artifact.size);
                println!("  SHA256: {}", artifact.checksum);
            }
            Err(e) => log::warn!("Expected artifact missing after success: {}", e),
        }
    }
}
