//! Settings struct with TOML-based sections.
//!
//! Settings supply the defaults a run starts from. Every value can be
//! overridden on the command line.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::MuxerKind;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Audio transcoding defaults.
    #[serde(default)]
    pub audio: AudioSettings,

    /// Muxer defaults.
    #[serde(default)]
    pub mux: MuxSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Program names or absolute paths of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "default_mkvinfo")]
    pub mkvinfo: String,

    #[serde(default = "default_mkvextract")]
    pub mkvextract: String,

    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,

    #[serde(default = "default_mp4creator")]
    pub mp4creator: String,

    #[serde(default = "default_mp4box")]
    pub mp4box: String,
}

fn default_mkvinfo() -> String {
    "mkvinfo".to_string()
}

fn default_mkvextract() -> String {
    "mkvextract".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

fn default_mp4creator() -> String {
    "mp4creator".to_string()
}

fn default_mp4box() -> String {
    "MP4Box".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mkvinfo: default_mkvinfo(),
            mkvextract: default_mkvextract(),
            ffmpeg: default_ffmpeg(),
            mp4creator: default_mp4creator(),
            mp4box: default_mp4box(),
        }
    }
}

/// Audio transcoding defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Bitrate in kbit/s.
    #[serde(default = "default_bitrate")]
    pub bitrate: u32,

    /// Channel layout (`5.1` or a plain channel count).
    #[serde(default = "default_channels")]
    pub channels: String,

    /// ffmpeg encoder name.
    #[serde(default = "default_codec")]
    pub codec: String,
}

fn default_bitrate() -> u32 {
    328
}

fn default_channels() -> String {
    "5.1".to_string()
}

fn default_codec() -> String {
    "libfaac".to_string()
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            bitrate: default_bitrate(),
            channels: default_channels(),
            codec: default_codec(),
        }
    }
}

/// Muxer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxSettings {
    /// Backend used when no `--use-...` flag is given.
    #[serde(default)]
    pub backend: MuxerKind,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level before any `-v` is applied.
    #[serde(default)]
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[tools]"));
        assert!(toml.contains("[audio]"));
        assert!(toml.contains("mp4box = \"MP4Box\""));
        assert!(toml.contains("backend = \"mp4creator\""));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[audio]\nbitrate = 192\n\n[mux]\nbackend = \"mp4box\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom values preserved
        assert_eq!(parsed.audio.bitrate, 192);
        assert_eq!(parsed.mux.backend, MuxerKind::Mp4box);
        // Defaults applied for missing
        assert_eq!(parsed.audio.channels, "5.1");
        assert_eq!(parsed.tools.ffmpeg, "ffmpeg");
        assert_eq!(parsed.logging.level, LogLevel::Warn);
    }
}
