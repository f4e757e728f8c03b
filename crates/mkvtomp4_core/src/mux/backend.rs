//! Muxer capability shared by both backends.

use std::path::Path;

use crate::config::ToolSettings;
use crate::io::Invocation;
use crate::models::MuxerKind;

use super::mp4box::Mp4Box;
use super::mp4creator::Mp4Creator;

/// Builds the three container operations for one muxing tool.
///
/// Every operation appends to the output container in place. A backend
/// returns `None` from [`add_hint`](MuxBackend::add_hint) when hinting is
/// already done while adding the video.
pub trait MuxBackend {
    fn kind(&self) -> MuxerKind;

    /// Attach the video stream as track 1 with the given frame rate.
    fn add_video(&self, output: &Path, video: &Path, fps: &str) -> Invocation;

    /// Add streaming hints for the video track.
    fn add_hint(&self, output: &Path) -> Option<Invocation>;

    /// Attach the audio stream and optimize the container for playback.
    fn add_audio(&self, output: &Path, audio: &Path, delay_ms: Option<i64>) -> Invocation;

    /// Whether `add_audio` honours a delay.
    fn supports_audio_delay(&self) -> bool;
}

/// Pick the backend once, from the configured kind.
pub fn create_backend(kind: MuxerKind, tools: &ToolSettings) -> Box<dyn MuxBackend> {
    match kind {
        MuxerKind::Mp4creator => Box::new(Mp4Creator::new(tools.mp4creator.clone())),
        MuxerKind::Mp4box => Box::new(Mp4Box::new(tools.mp4box.clone())),
    }
}
