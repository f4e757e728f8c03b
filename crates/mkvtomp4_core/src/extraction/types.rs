//! Error types for track inspection and extraction.

use thiserror::Error;

use crate::io::CommandError;
use crate::models::{TrackId, TrackType};

/// Error type for reading the track report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A video or audio track uses a codec the pipeline cannot handle.
    #[error("unsupported {track_type} codec on track {track}: {codec}")]
    UnsupportedCodec {
        track: TrackId,
        track_type: TrackType,
        codec: String,
    },

    /// No track of the given role was found.
    #[error("no {0} track found")]
    MissingTrack(TrackType),

    /// The selected track has no codec ID line.
    #[error("{track_type} track {track} has no codec ID")]
    MissingCodec { track: TrackId, track_type: TrackType },

    /// The selected video track has no default duration line.
    #[error("video track {0} does not report a frame rate")]
    MissingFrameRate(TrackId),

    /// Running the inspection tool failed.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Result type for report parsing.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_track() {
        let err = ReportError::UnsupportedCodec {
            track: TrackId::new(1),
            track_type: TrackType::Video,
            codec: "V_VP9".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported video codec on track 1: V_VP9");
        assert_eq!(
            ReportError::MissingTrack(TrackType::Audio).to_string(),
            "no audio track found"
        );
    }
}
