//! Pipeline step trait definition.

use super::errors::StepResult;
use super::types::{Context, JobState, StepOutcome};
use crate::models::Stage;

/// Trait for pipeline steps.
///
/// The pipeline checks the checkpoint for [`stage`](PipelineStep::stage)
/// first, then calls:
///
/// 1. `validate_input` - check that earlier steps left what this one needs
/// 2. `execute` - run the tool (or render it in dry-run mode)
pub trait PipelineStep: Send + Sync {
    /// Stage this step implements.
    fn stage(&self) -> Stage;

    /// Get the step name (for logging and error context).
    fn name(&self) -> String {
        self.stage().to_string()
    }

    /// Validate inputs before execution.
    fn validate_input(&self, ctx: &Context, state: &JobState) -> StepResult<()>;

    /// Execute the step's main work.
    ///
    /// Returns `StepOutcome::Skipped` when there is nothing to do for this
    /// source, which is not an error.
    fn execute(&self, ctx: &Context, state: &mut JobState) -> StepResult<StepOutcome>;
}
