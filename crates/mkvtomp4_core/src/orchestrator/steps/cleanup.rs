//! Cleanup step - remove temporary streams.

use crate::models::Stage;
use crate::orchestrator::errors::StepResult;
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, JobState, StepOutcome};

/// Removes every registered artifact.
///
/// Failed runs are cleaned up by dropping `JobState`; this step only makes
/// the removal on success explicit.
pub struct CleanupStep;

impl PipelineStep for CleanupStep {
    fn stage(&self) -> Stage {
        Stage::Cleanup
    }

    fn validate_input(&self, _ctx: &Context, _state: &JobState) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        if !state.artifacts.is_armed() {
            let reason = if ctx.is_dry_run() {
                "dry run"
            } else {
                "keeping temporary files"
            };
            return Ok(StepOutcome::Skipped(reason.to_string()));
        }
        state.artifacts.cleanup();
        Ok(StepOutcome::Success)
    }
}
