//! Extract steps - pull the selected tracks out with mkvextract.

use crate::extraction::extract_track;
use crate::models::Stage;
use crate::orchestrator::errors::StepResult;
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, JobState, StepOutcome};

/// Extracts the video track to `<source>.h264`.
pub struct ExtractVideoStep;

impl PipelineStep for ExtractVideoStep {
    fn stage(&self) -> Stage {
        Stage::ExtractVideo
    }

    fn validate_input(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        // Registered first so a partial file is removed too.
        state.artifacts.register(&state.video);
        extract_track(
            ctx.runner,
            &ctx.config.tools.mkvextract,
            &ctx.config.source,
            state.tracks.video,
            &state.video,
            ctx.config.verbosity,
        )?;
        Ok(StepOutcome::Success)
    }
}

/// Extracts the audio track to `<source>.<codec>`.
pub struct ExtractAudioStep;

impl PipelineStep for ExtractAudioStep {
    fn stage(&self) -> Stage {
        Stage::ExtractAudio
    }

    fn validate_input(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        state.artifacts.register(&state.audio);
        extract_track(
            ctx.runner,
            &ctx.config.tools.mkvextract,
            &ctx.config.source,
            state.tracks.audio,
            &state.audio,
            ctx.config.verbosity,
        )?;
        Ok(StepOutcome::Success)
    }
}
