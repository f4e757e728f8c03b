//! Pipeline runner that executes steps in sequence.

use super::errors::{PipelineError, PipelineResult};
use super::step::PipelineStep;
use super::types::{Context, JobState, StepOutcome};
use crate::logging::MessagePrefix;
use crate::models::Stage;

/// Pipeline that runs a sequence of steps.
///
/// Before each step the checkpoint for its stage is checked. A set
/// checkpoint ends the run successfully without touching that stage or
/// any later one.
pub struct Pipeline {
    /// Steps to execute in order.
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the pipeline.
    pub fn add_step<S: PipelineStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: PipelineStep + 'static>(mut self, step: S) -> Self {
        self.add_step(step);
        self
    }

    /// Run the pipeline with the given context and state.
    ///
    /// Executes each step in order:
    /// 1. Check the checkpoint
    /// 2. Run `validate_input`
    /// 3. Run `execute`
    pub fn run(&self, ctx: &Context, state: &mut JobState) -> PipelineResult<PipelineRunResult> {
        let mut result = PipelineRunResult::default();

        for step in &self.steps {
            let stage = step.stage();
            let step_name = step.name();

            if ctx.config.stops_before(stage) {
                tracing::info!("Stopping before '{}'", step_name);
                if stage == Stage::Cleanup {
                    state.artifacts.keep();
                }
                result.stopped_before = Some(stage);
                return Ok(result);
            }

            tracing::info!("{}", MessagePrefix::Stage.format(&step_name));

            if let Err(e) = step.validate_input(ctx, state) {
                tracing::debug!("Input validation failed: {}", e);
                return Err(PipelineError::step_failed(&step_name, e));
            }

            let outcome = step
                .execute(ctx, state)
                .map_err(|e| PipelineError::step_failed(&step_name, e))?;

            match outcome {
                StepOutcome::Success => {
                    let message = format!("{} completed", step_name);
                    tracing::info!("{}", MessagePrefix::Success.format(&message));
                    result.steps_completed.push(stage);
                }
                StepOutcome::Skipped(reason) => {
                    tracing::info!("{} skipped: {}", step_name, reason);
                    result.steps_skipped.push(stage);
                }
            }
        }

        Ok(result)
    }

    /// Get the number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get stages in order.
    pub fn stages(&self) -> Vec<Stage> {
        self.steps.iter().map(|s| s.stage()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineRunResult {
    /// Stages that completed successfully.
    pub steps_completed: Vec<Stage>,
    /// Stages that had nothing to do.
    pub steps_skipped: Vec<Stage>,
    /// Checkpoint that ended the run, if any.
    pub stopped_before: Option<Stage>,
}
