//! Pipeline step implementations, one per stage.

mod cleanup;
mod convert;
mod correct;
mod extract;
mod mux;

pub use cleanup::CleanupStep;
pub use convert::ConvertAudioStep;
pub use correct::CorrectProfileStep;
pub use extract::{ExtractAudioStep, ExtractVideoStep};
pub use mux::{AudioMp4Step, HintMp4Step, VideoMp4Step};

use std::path::Path;

use super::errors::{StepError, StepResult};
use super::types::Context;

/// Fail unless `path` exists. Nothing is written in dry-run mode, so the
/// check is skipped there.
fn require_file(ctx: &Context, path: &Path) -> StepResult<()> {
    if ctx.is_dry_run() || path.is_file() {
        Ok(())
    } else {
        Err(StepError::file_not_found(path))
    }
}
