//! Core types for the conversion pipeline.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::io::{append_extension, TempArtifacts, ToolRunner};
use crate::models::{Stage, TrackDescriptor};
use crate::mux::{create_backend, MuxBackend};

/// Read-only context passed to pipeline steps.
///
/// Holds the run configuration, the runner every tool call goes through,
/// and the muxer backend picked for this run. Mutable state goes in
/// `JobState`.
pub struct Context<'a> {
    pub config: &'a RunConfig,
    pub runner: &'a dyn ToolRunner,
    pub muxer: Box<dyn MuxBackend>,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a RunConfig, runner: &'a dyn ToolRunner) -> Self {
        Self {
            config,
            runner,
            muxer: create_backend(config.muxer, &config.tools),
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.runner.is_dry_run()
    }
}

/// Mutable state of one run.
///
/// Owns the temporary files: dropping the state removes them unless they
/// are kept, so every way out of the pipeline cleans up.
#[derive(Debug)]
pub struct JobState {
    /// Tracks selected from the source.
    pub tracks: TrackDescriptor,
    /// Extracted video stream.
    pub video: PathBuf,
    /// Audio stream to mux; points at the converted file once converted.
    pub audio: PathBuf,
    pub artifacts: TempArtifacts,
}

impl JobState {
    /// Derive artifact names next to the source file.
    pub fn new(config: &RunConfig, tracks: TrackDescriptor) -> Self {
        let video = append_extension(&config.source, tracks.video_codec.extension());
        let audio = append_extension(&config.source, tracks.audio_codec.extension());
        let armed = !config.keep_temp_files && !config.dry_run;

        Self {
            tracks,
            video,
            audio,
            artifacts: TempArtifacts::new(armed),
        }
    }
}

/// Outcome of executing a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step completed successfully.
    Success,
    /// Step had nothing to do, with reason.
    Skipped(String),
}

/// How a conversion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every stage ran.
    Completed,
    /// A checkpoint stopped the run right before this stage.
    Stopped(Stage),
}
