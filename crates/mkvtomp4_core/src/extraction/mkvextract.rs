//! Low-level mkvextract command wrapper.

use std::path::Path;

use crate::io::{CommandResult, Invocation, ToolRunner};
use crate::models::TrackId;

/// Build `mkvextract tracks <source> [-v] <id>:<output>`.
pub fn extract_track_invocation(
    mkvextract: &str,
    source: &Path,
    track: TrackId,
    output: &Path,
    verbosity: u8,
) -> Invocation {
    let mut inv = Invocation::new(mkvextract).arg("tracks").path_arg(source);
    if verbosity > 0 {
        inv = inv.arg("-v");
    }
    inv.path_word_arg(&format!("{}:", track.extract_spec()), output, "")
}

/// Extract a single track from a Matroska file.
pub fn extract_track(
    runner: &dyn ToolRunner,
    mkvextract: &str,
    source: &Path,
    track: TrackId,
    output: &Path,
    verbosity: u8,
) -> CommandResult<()> {
    runner.run(&extract_track_invocation(
        mkvextract, source, track, output, verbosity,
    ))?;

    if !runner.is_dry_run() {
        tracing::debug!(
            "extracted track {} from {} to {}",
            track,
            source.display(),
            output.display()
        );
    }
    Ok(())
}
