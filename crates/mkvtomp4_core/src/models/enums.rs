//! Core enums used throughout the pipeline.

use serde::{Deserialize, Serialize};

/// Role of a track inside the source container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
}

impl TrackType {
    /// Parse the track type as printed by `mkvinfo`.
    ///
    /// Returns `None` for roles the pipeline does not handle
    /// (subtitles, buttons, complex tracks).
    pub fn from_report(value: &str) -> Option<Self> {
        match value {
            "video" => Some(TrackType::Video),
            "audio" => Some(TrackType::Audio),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackType::Video => write!(f, "video"),
            TrackType::Audio => write!(f, "audio"),
        }
    }
}

/// Video codecs accepted from the source container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    /// H.264 / MPEG-4 AVC (`V_MPEG4/ISO/AVC`).
    Avc,
}

impl VideoCodec {
    /// Codec name without the Matroska `V_` prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoCodec::Avc => "MPEG4/ISO/AVC",
        }
    }

    /// Normalized codec name (the Matroska `V_` prefix is optional).
    pub fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "MPEG4/ISO/AVC" => Some(VideoCodec::Avc),
            _ => None,
        }
    }

    /// File extension for the extracted elementary stream.
    pub fn extension(&self) -> &'static str {
        match self {
            VideoCodec::Avc => "h264",
        }
    }
}

impl std::fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio codecs accepted from the source container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    Aac,
    Ac3,
    Dts,
}

impl AudioCodec {
    /// Codec name without the Matroska `A_` prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "AAC",
            AudioCodec::Ac3 => "AC3",
            AudioCodec::Dts => "DTS",
        }
    }

    pub fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "AAC" => Some(AudioCodec::Aac),
            "AC3" => Some(AudioCodec::Ac3),
            "DTS" => Some(AudioCodec::Dts),
            _ => None,
        }
    }

    /// File extension for the extracted elementary stream.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioCodec::Aac => "aac",
            AudioCodec::Ac3 => "ac3",
            AudioCodec::Dts => "dts",
        }
    }

    /// Whether the stream can go into the MP4 container as is.
    pub fn is_mp4_native(&self) -> bool {
        matches!(self, AudioCodec::Aac)
    }
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which external tool builds the MP4 container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuxerKind {
    /// `mp4creator` from mpeg4ip.
    #[default]
    Mp4creator,
    /// `MP4Box` from GPAC.
    Mp4box,
}

impl std::fmt::Display for MuxerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuxerKind::Mp4creator => write!(f, "mp4creator"),
            MuxerKind::Mp4box => write!(f, "mp4box"),
        }
    }
}

/// Ordered stages of a conversion run.
///
/// Every stage can be preceded by a checkpoint (`--stop-before-<flag>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    ExtractVideo,
    CorrectProfile,
    ExtractAudio,
    ConvertAudio,
    VideoMp4,
    HintMp4,
    AudioMp4,
    Cleanup,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 8] = [
        Stage::ExtractVideo,
        Stage::CorrectProfile,
        Stage::ExtractAudio,
        Stage::ConvertAudio,
        Stage::VideoMp4,
        Stage::HintMp4,
        Stage::AudioMp4,
        Stage::Cleanup,
    ];

    /// Suffix of the `--stop-before-...` flag for this stage.
    pub fn flag_name(&self) -> &'static str {
        match self {
            Stage::ExtractVideo => "extract-video",
            Stage::CorrectProfile => "correct-profile",
            Stage::ExtractAudio => "extract-audio",
            Stage::ConvertAudio => "convert-audio",
            Stage::VideoMp4 => "video-mp4",
            Stage::HintMp4 => "hinting-mp4",
            Stage::AudioMp4 => "audio-mp4",
            Stage::Cleanup => "cleanup",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::ExtractVideo => "Extract video",
            Stage::CorrectProfile => "Correct profile",
            Stage::ExtractAudio => "Extract audio",
            Stage::ConvertAudio => "Convert audio",
            Stage::VideoMp4 => "Mux video",
            Stage::HintMp4 => "Hint video",
            Stage::AudioMp4 => "Mux audio",
            Stage::Cleanup => "Cleanup",
        };
        f.write_str(name)
    }
}
