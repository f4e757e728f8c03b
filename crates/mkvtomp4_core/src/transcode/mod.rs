//! Audio transcoding.
//!
//! AC3 and DTS tracks are re-encoded with ffmpeg before muxing. A fix
//! mode decodes to an intermediate WAV file first, which helps with
//! streams ffmpeg cannot re-encode directly.

mod ffmpeg;

pub use ffmpeg::{
    channel_argument, convert_invocation, AudioTranscoder, INTERMEDIATE_CODEC,
    INTERMEDIATE_EXTENSION,
};
