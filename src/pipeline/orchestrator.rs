//! Sequencing of the build and packaging stages.

use super::{
    BuildStage, PackagingStage, PipelineResult, Settings, StageResult,
    stages::Stage,
};

/// Where a pipeline run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Building,
    Packaging,
    Succeeded,
    /// Terminal; carries the failing stage's exit code.
    Failed(i32),
}

/// Runs a build stage and then a packaging stage, stopping at the first failure.
///
/// # Examples
///
/// ```no_run
/// use boxpack::pipeline::{Pipeline, SettingsBuilder};
///
/// # async fn example() -> boxpack::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let mut pipeline = Pipeline::from_settings(&settings);
/// let result = pipeline.run().await;
/// std::process::exit(result.exit_code());
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<B = BuildStage, P = PackagingStage> {
    build: B,
    package: P,
    state: PipelineState,
}

impl Pipeline {
    /// Pipeline over the real compiler and packer.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(BuildStage::new(settings), PackagingStage::new(settings))
    }
}

impl<B: Stage, P: Stage> Pipeline<B, P> {
    pub fn new(build: B, package: P) -> Self {
        Self {
            build,
            package,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs both stages in order.
    ///
    /// A failed build halts the run: packaging is never invoked and the build's exit code is
    /// final. Otherwise the packaging result is final. Codes are never renumbered.
    pub async fn run(&mut self) -> PipelineResult {
        self.transition(PipelineState::Idle);

        self.transition(PipelineState::Building);
        let build = self.build.run().await;
        if !build.is_success() {
            log::warn!(
                "{} stage failed with exit code {}; skipping {}",
                self.build.kind(),
                build.code(),
                self.package.kind()
            );
            self.finish(&build);
            return PipelineResult::halted(build);
        }

        self.transition(PipelineState::Packaging);
        let package = self.package.run().await;
        self.finish(&package);
        PipelineResult::completed(build, package)
    }

    fn finish(&mut self, last: &StageResult) {
        if last.is_success() {
            self.transition(PipelineState::Succeeded);
        } else {
            self.transition(PipelineState::Failed(last.code()));
        }
    }

    fn transition(&mut self, next: PipelineState) {
        log::debug!("Pipeline {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
