//! Conversion pipeline.
//!
//! A run inspects the source once, then executes one step per stage:
//!
//! ```text
//! inspect (mkvinfo)
//!     ├── Step: Extract video     mkvextract → <source>.h264
//!     ├── Step: Correct profile   level byte → 4.1
//!     ├── Step: Extract audio     mkvextract → <source>.<codec>
//!     ├── Step: Convert audio     ffmpeg → <audio>.aac (skipped for AAC)
//!     ├── Step: Mux video         mp4creator / MP4Box
//!     ├── Step: Hint video        mp4creator only
//!     ├── Step: Mux audio         mp4creator / MP4Box
//!     └── Step: Cleanup
//! ```
//!
//! Every stage has a checkpoint (`--stop-before-<stage>`). Temporary files
//! belong to `JobState` and are removed when it is dropped, so failures and
//! checkpoint exits clean up the same way a finished run does.
//!
//! # Example
//!
//! ```ignore
//! use mkvtomp4_core::io::CommandRunner;
//! use mkvtomp4_core::orchestrator::{run_conversion, RunOutcome};
//!
//! let runner = CommandRunner::new(config.dry_run);
//! match run_conversion(&config, &runner)? {
//!     RunOutcome::Completed => println!("wrote {}", config.output.display()),
//!     RunOutcome::Stopped(stage) => println!("stopped before {}", stage),
//! }
//! ```

mod errors;
mod pipeline;
mod step;
pub mod steps;
mod types;

pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use pipeline::{Pipeline, PipelineRunResult};
pub use step::PipelineStep;
pub use steps::{
    AudioMp4Step, CleanupStep, ConvertAudioStep, CorrectProfileStep, ExtractAudioStep,
    ExtractVideoStep, HintMp4Step, VideoMp4Step,
};
pub use types::{Context, JobState, RunOutcome, StepOutcome};

use crate::config::RunConfig;
use crate::extraction::inspect;
use crate::io::ToolRunner;

/// Create a standard pipeline with all steps in the correct order.
pub fn create_standard_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(ExtractVideoStep)
        .with_step(CorrectProfileStep)
        .with_step(ExtractAudioStep)
        .with_step(ConvertAudioStep)
        .with_step(VideoMp4Step)
        .with_step(HintMp4Step)
        .with_step(AudioMp4Step)
        .with_step(CleanupStep)
}

/// Convert `config.source` into `config.output`.
///
/// Inspection failures (unsupported codec, missing track) are reported
/// before any file is written.
pub fn run_conversion(config: &RunConfig, runner: &dyn ToolRunner) -> PipelineResult<RunOutcome> {
    let tracks = inspect(runner, &config.tools.mkvinfo, &config.source)
        .map_err(|e| PipelineError::inspection(&config.source, e))?;

    let ctx = Context::new(config, runner);
    let mut state = JobState::new(config, tracks);
    let result = create_standard_pipeline().run(&ctx, &mut state)?;

    tracing::debug!(
        "{} step(s) completed, {} skipped",
        result.steps_completed.len(),
        result.steps_skipped.len()
    );

    Ok(match result.stopped_before {
        Some(stage) => RunOutcome::Stopped(stage),
        None => RunOutcome::Completed,
    })
}
