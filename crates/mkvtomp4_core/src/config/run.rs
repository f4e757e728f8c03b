//! Immutable configuration of a single conversion run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::manager::{ConfigError, ConfigResult};
use super::settings::{Settings, ToolSettings};
use crate::models::{MuxerKind, Stage};

/// Extension of the output container.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Options as given on the command line, before defaults are applied.
///
/// `None` means "not given"; the value then comes from the settings file
/// or the built-in default.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Source Matroska file.
    pub source: PathBuf,
    /// Name the program was invoked as (used for replay commands).
    pub program: String,
    pub output: Option<PathBuf>,
    pub audio_bitrate: Option<u32>,
    pub audio_channels: Option<String>,
    pub audio_codec: Option<String>,
    pub audio_delay_ms: Option<i64>,
    pub muxer: Option<MuxerKind>,
    pub fix_audio: bool,
    pub keep_temp_files: bool,
    pub dry_run: bool,
    pub verbosity: u8,
    pub stop_before: Vec<Stage>,
}

/// Audio transcoding options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOptions {
    /// Bitrate in kbit/s.
    pub bitrate: u32,
    /// Channel layout as given (`5.1` or a count).
    pub channels: String,
    /// ffmpeg encoder name.
    pub codec: String,
    /// Presentation delay of the audio track in milliseconds.
    pub delay_ms: Option<i64>,
    /// Route the conversion through an intermediate WAV file.
    pub fix: bool,
}

/// Resolved, validated configuration for one run.
///
/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub program: String,
    pub audio: AudioOptions,
    pub muxer: MuxerKind,
    pub tools: ToolSettings,
    pub dry_run: bool,
    pub keep_temp_files: bool,
    pub verbosity: u8,
    stop_before: BTreeSet<Stage>,
}

impl RunConfig {
    /// Merge a request with settings and validate option combinations.
    ///
    /// Fails with `InvalidCombination` before anything touches the disk.
    pub fn resolve(request: RunRequest, settings: &Settings) -> ConfigResult<Self> {
        let muxer = request.muxer.unwrap_or(settings.mux.backend);

        if request.audio_delay_ms.is_some() && muxer == MuxerKind::Mp4creator {
            return Err(ConfigError::InvalidCombination(
                "Cannot use --audio-delay-ms with mp4creator. Try --use-mp4box".to_string(),
            ));
        }

        let output = request
            .output
            .unwrap_or_else(|| default_output_path(&request.source));

        Ok(Self {
            output,
            program: request.program,
            audio: AudioOptions {
                bitrate: request.audio_bitrate.unwrap_or(settings.audio.bitrate),
                channels: request
                    .audio_channels
                    .unwrap_or_else(|| settings.audio.channels.clone()),
                codec: request
                    .audio_codec
                    .unwrap_or_else(|| settings.audio.codec.clone()),
                delay_ms: request.audio_delay_ms,
                fix: request.fix_audio,
            },
            muxer,
            tools: settings.tools.clone(),
            dry_run: request.dry_run,
            keep_temp_files: request.keep_temp_files,
            verbosity: request.verbosity,
            stop_before: request.stop_before.into_iter().collect(),
            source: request.source,
        })
    }

    /// Whether the run must end right before `stage`.
    pub fn stops_before(&self, stage: Stage) -> bool {
        self.stop_before.contains(&stage)
    }
}

/// Source path with its extension replaced by `.mp4`.
pub fn default_output_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source: &str) -> RunRequest {
        RunRequest {
            source: PathBuf::from(source),
            program: "mkvtomp4".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_come_from_settings() {
        let config = RunConfig::resolve(request("/media/movie.mkv"), &Settings::default()).unwrap();

        assert_eq!(config.output, PathBuf::from("/media/movie.mp4"));
        assert_eq!(config.audio.bitrate, 328);
        assert_eq!(config.audio.channels, "5.1");
        assert_eq!(config.audio.codec, "libfaac");
        assert_eq!(config.muxer, MuxerKind::Mp4creator);
        assert!(!config.stops_before(Stage::ExtractVideo));
    }

    #[test]
    fn command_line_overrides_settings() {
        let mut settings = Settings::default();
        settings.audio.bitrate = 192;
        settings.mux.backend = MuxerKind::Mp4box;

        let mut req = request("movie.mkv");
        req.audio_bitrate = Some(256);
        req.muxer = Some(MuxerKind::Mp4creator);
        req.output = Some(PathBuf::from("out/film.mp4"));
        req.stop_before = vec![Stage::HintMp4];

        let config = RunConfig::resolve(req, &settings).unwrap();
        assert_eq!(config.audio.bitrate, 256);
        assert_eq!(config.muxer, MuxerKind::Mp4creator);
        assert_eq!(config.output, PathBuf::from("out/film.mp4"));
        assert!(config.stops_before(Stage::HintMp4));
        assert!(!config.stops_before(Stage::AudioMp4));
    }

    #[test]
    fn audio_delay_rejected_for_mp4creator() {
        let mut req = request("movie.mkv");
        req.audio_delay_ms = Some(100);

        let err = RunConfig::resolve(req, &Settings::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCombination(_)));
        assert!(err.to_string().contains("--use-mp4box"));
    }

    #[test]
    fn audio_delay_accepted_for_mp4box() {
        let mut req = request("movie.mkv");
        req.audio_delay_ms = Some(100);
        req.muxer = Some(MuxerKind::Mp4box);

        let config = RunConfig::resolve(req, &Settings::default()).unwrap();
        assert_eq!(config.audio.delay_ms, Some(100));
    }

    #[test]
    fn settings_backend_counts_for_delay_check() {
        let mut settings = Settings::default();
        settings.mux.backend = MuxerKind::Mp4box;

        let mut req = request("movie.mkv");
        req.audio_delay_ms = Some(-40);
        assert!(RunConfig::resolve(req, &settings).is_ok());
    }

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("dir/show.s01e01.mkv")),
            PathBuf::from("dir/show.s01e01.mp4")
        );
        assert_eq!(default_output_path(Path::new("noext")), PathBuf::from("noext.mp4"));
    }
}
