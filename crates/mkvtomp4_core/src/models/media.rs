//! Track identification structures.

use serde::{Deserialize, Serialize};

use super::enums::{AudioCodec, VideoCodec};

/// Identifier of a track as reported by `mkvinfo`.
///
/// Older `mkvinfo` builds only print the track number, which is what
/// `mkvextract` expected at the time. Newer builds append the zero-based
/// track ID used by `mkvextract`; when present that ID wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId {
    /// Matroska track number.
    pub number: u32,
    /// Track ID for mkvmerge/mkvextract, when reported.
    pub extract_id: Option<u32>,
}

impl TrackId {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            extract_id: None,
        }
    }

    pub fn with_extract_id(mut self, id: u32) -> Self {
        self.extract_id = Some(id);
        self
    }

    /// Identifier to pass to `mkvextract tracks`.
    pub fn extract_spec(&self) -> u32 {
        self.extract_id.unwrap_or(self.number)
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// The video and audio tracks selected from the source container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub video: TrackId,
    pub audio: TrackId,
    pub video_codec: VideoCodec,
    pub audio_codec: AudioCodec,
    /// Frame rate exactly as printed in the report (e.g. `23.976`).
    pub fps: String,
}
