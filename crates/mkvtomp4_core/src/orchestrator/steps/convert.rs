//! Convert step - re-encode non-AAC audio.

use crate::io::append_extension;
use crate::models::Stage;
use crate::orchestrator::errors::StepResult;
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, JobState, StepOutcome};
use crate::transcode::AudioTranscoder;

use super::require_file;

/// Extension of the converted audio file.
const CONVERTED_EXTENSION: &str = "aac";

/// Converts AC3 and DTS audio to `<audio>.aac`.
///
/// AAC audio goes into the container as extracted.
pub struct ConvertAudioStep;

impl PipelineStep for ConvertAudioStep {
    fn stage(&self) -> Stage {
        Stage::ConvertAudio
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        if state.tracks.audio_codec.is_mp4_native() {
            return Ok(());
        }
        require_file(ctx, &state.audio)
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        let codec = state.tracks.audio_codec;
        if codec.is_mp4_native() {
            return Ok(StepOutcome::Skipped(format!("audio is already {}", codec)));
        }

        let converted = append_extension(&state.audio, CONVERTED_EXTENSION);
        state.artifacts.register(&converted);

        AudioTranscoder::new(ctx.runner, &ctx.config.tools.ffmpeg, &ctx.config.audio)
            .verbosity(ctx.config.verbosity)
            .keep_temp_files(ctx.config.keep_temp_files)
            .convert(&state.audio, &converted)?;

        state.audio = converted;
        Ok(StepOutcome::Success)
    }
}
