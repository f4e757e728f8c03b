//! Mux steps - build the MP4 container in three passes.

use crate::models::Stage;
use crate::orchestrator::errors::StepResult;
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, JobState, StepOutcome};

use super::require_file;

/// Adds the video track with its frame rate.
pub struct VideoMp4Step;

impl PipelineStep for VideoMp4Step {
    fn stage(&self) -> Stage {
        Stage::VideoMp4
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        require_file(ctx, &state.video)
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let inv = ctx
            .muxer
            .add_video(&ctx.config.output, &state.video, &state.tracks.fps);
        ctx.runner.run(&inv)?;
        Ok(StepOutcome::Success)
    }
}

/// Adds streaming hints, where the backend needs a separate pass.
pub struct HintMp4Step;

impl PipelineStep for HintMp4Step {
    fn stage(&self) -> Stage {
        Stage::HintMp4
    }

    fn validate_input(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, _state: &mut JobState) -> StepResult<StepOutcome> {
        match ctx.muxer.add_hint(&ctx.config.output) {
            Some(inv) => {
                ctx.runner.run(&inv)?;
                Ok(StepOutcome::Success)
            }
            None => Ok(StepOutcome::Skipped(format!(
                "{} hints while adding video",
                ctx.muxer.kind()
            ))),
        }
    }
}

/// Adds the audio track and optimizes the container.
pub struct AudioMp4Step;

impl PipelineStep for AudioMp4Step {
    fn stage(&self) -> Stage {
        Stage::AudioMp4
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        require_file(ctx, &state.audio)
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        if ctx.config.audio.delay_ms.is_some() && !ctx.muxer.supports_audio_delay() {
            tracing::warn!("{} ignores the audio delay", ctx.muxer.kind());
        }
        let inv = ctx
            .muxer
            .add_audio(&ctx.config.output, &state.audio, ctx.config.audio.delay_ms);
        ctx.runner.run(&inv)?;
        Ok(StepOutcome::Success)
    }
}
