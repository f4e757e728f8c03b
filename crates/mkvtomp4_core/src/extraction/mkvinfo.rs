//! Runs `mkvinfo` and scans its report.

use std::path::Path;

use super::report::parse_report;
use super::types::ReportResult;
use crate::io::{Invocation, ToolRunner};
use crate::models::TrackDescriptor;

/// Build the inspection command. `LC_ALL=C` keeps the report unlocalized.
pub fn inspect_invocation(mkvinfo: &str, source: &Path) -> Invocation {
    Invocation::new(mkvinfo).env("LC_ALL", "C").path_arg(source)
}

/// Inspect `source` and select its video and audio tracks.
///
/// Always executes, also in dry-run mode, since the later commands depend
/// on the track numbers and frame rate.
pub fn inspect(runner: &dyn ToolRunner, mkvinfo: &str, source: &Path) -> ReportResult<TrackDescriptor> {
    let report = runner.query(&inspect_invocation(mkvinfo, source))?;
    let tracks = parse_report(report.lines())?;

    tracing::debug!(
        "selected video track {} ({}, {} fps) and audio track {} ({})",
        tracks.video,
        tracks.video_codec,
        tracks.fps,
        tracks.audio,
        tracks.audio_codec
    );

    Ok(tracks)
}
