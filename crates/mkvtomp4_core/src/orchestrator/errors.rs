//! Error types for the conversion pipeline.
//!
//! Errors carry context that chains through layers:
//! Run → Step → Tool → Detail

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::correction::ProfileError;
use crate::extraction::ReportError;
use crate::io::CommandError;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source could not be inspected or has unusable tracks.
    #[error("Cannot convert {}: {source}", path.display())]
    Inspection {
        path: PathBuf,
        #[source]
        source: ReportError,
    },

    /// A step failed during execution.
    #[error("Step '{step_name}' failed: {source}")]
    StepFailed {
        step_name: String,
        #[source]
        source: StepError,
    },
}

impl PipelineError {
    pub fn inspection(path: &Path, source: ReportError) -> Self {
        Self::Inspection {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a step failed error.
    pub fn step_failed(step_name: impl Into<String>, source: StepError) -> Self {
        Self::StepFailed {
            step_name: step_name.into(),
            source,
        }
    }
}

/// Error from a pipeline step.
#[derive(Error, Debug)]
pub enum StepError {
    /// An external tool failed or could not be started.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Patching the level byte failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A file an earlier step should have written is missing.
    #[error("Required file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
}

impl StepError {
    /// Create a file not found error.
    pub fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.to_path_buf(),
        }
    }
}

/// Result type for step operations.
pub type StepResult<T> = Result<T, StepError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
