//! Correct step - patch the H.264 level byte.

use crate::correction::correct_profile;
use crate::models::Stage;
use crate::orchestrator::errors::StepResult;
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, JobState, StepOutcome};

use super::require_file;

pub struct CorrectProfileStep;

impl PipelineStep for CorrectProfileStep {
    fn stage(&self) -> Stage {
        Stage::CorrectProfile
    }

    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()> {
        require_file(ctx, &state.video)
    }

    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome> {
        correct_profile(ctx.runner, &ctx.config.program, &state.video)?;
        Ok(StepOutcome::Success)
    }
}
