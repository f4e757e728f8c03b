//! Command line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use mkvtomp4_core::config::RunRequest;
use mkvtomp4_core::models::{MuxerKind, Stage};

/// Usage line printed for usage errors.
pub const USAGE: &str = "usage: mkvtomp4 [OPTIONS] [--] <mkvfile>";

#[derive(Parser, Debug)]
#[command(name = "mkvtomp4")]
#[command(version = mkvtomp4_core::version())]
#[command(about = "Converts H.264 Matroska files to MP4 using mkvtoolnix, ffmpeg and mp4creator or MP4Box")]
#[command(override_usage = "mkvtomp4 [OPTIONS] [--] <mkvfile>")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Print help
    #[arg(short = 'h', long = "help", alias = "usage", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// More output; repeat for more
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Settings file
    #[arg(long, value_name = "PATH", env = "MKVTOMP4_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Mux with MP4Box
    #[arg(long, overrides_with = "use_mp4creator")]
    pub use_mp4box: bool,

    /// Mux with mp4creator
    #[arg(long, overrides_with = "use_mp4box")]
    pub use_mp4creator: bool,

    /// Audio delay in milliseconds (MP4Box only)
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub audio_delay_ms: Option<i64>,

    /// Audio bitrate in kbit/s [default: 328]
    #[arg(long, value_name = "KBPS")]
    pub audio_bitrate: Option<u32>,

    /// Audio channels, `5.1` means six [default: 5.1]
    #[arg(long, value_name = "CHANNELS")]
    pub audio_channels: Option<String>,

    /// ffmpeg audio encoder [default: libfaac]
    #[arg(long, value_name = "NAME")]
    pub audio_codec: Option<String>,

    /// Decode audio to WAV before encoding
    #[arg(long)]
    pub fix_audio: bool,

    /// Output file [default: <mkvfile> with .mp4 extension]
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Leave extracted and converted streams on disk
    #[arg(long)]
    pub keep_temp_files: bool,

    /// Print the commands instead of running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Only patch the H.264 level of <mkvfile> (an extracted stream)
    #[arg(long)]
    pub correct_profile_only: bool,

    #[arg(long)]
    pub stop_before_extract_video: bool,

    #[arg(long)]
    pub stop_before_correct_profile: bool,

    #[arg(long)]
    pub stop_before_extract_audio: bool,

    #[arg(long)]
    pub stop_before_convert_audio: bool,

    #[arg(long)]
    pub stop_before_video_mp4: bool,

    #[arg(long)]
    pub stop_before_hinting_mp4: bool,

    #[arg(long)]
    pub stop_before_audio_mp4: bool,

    /// Stop after muxing, keeping temporary files
    #[arg(long)]
    pub stop_before_cleanup: bool,

    /// Source file; extra arguments are ignored
    #[arg(value_name = "mkvfile")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Muxer chosen on the command line; the last flag wins.
    pub fn muxer(&self) -> Option<MuxerKind> {
        if self.use_mp4box {
            Some(MuxerKind::Mp4box)
        } else if self.use_mp4creator {
            Some(MuxerKind::Mp4creator)
        } else {
            None
        }
    }

    /// Stages with a checkpoint set.
    pub fn stop_before(&self) -> Vec<Stage> {
        [
            (Stage::ExtractVideo, self.stop_before_extract_video),
            (Stage::CorrectProfile, self.stop_before_correct_profile),
            (Stage::ExtractAudio, self.stop_before_extract_audio),
            (Stage::ConvertAudio, self.stop_before_convert_audio),
            (Stage::VideoMp4, self.stop_before_video_mp4),
            (Stage::HintMp4, self.stop_before_hinting_mp4),
            (Stage::AudioMp4, self.stop_before_audio_mp4),
            (Stage::Cleanup, self.stop_before_cleanup),
        ]
        .into_iter()
        .filter_map(|(stage, set)| set.then_some(stage))
        .collect()
    }

    /// Build the run request for `source`.
    pub fn to_request(&self, source: &Path, program: String) -> RunRequest {
        RunRequest {
            source: source.to_path_buf(),
            program,
            output: self.output.clone(),
            audio_bitrate: self.audio_bitrate,
            audio_channels: self.audio_channels.clone(),
            audio_codec: self.audio_codec.clone(),
            audio_delay_ms: self.audio_delay_ms,
            muxer: self.muxer(),
            fix_audio: self.fix_audio,
            keep_temp_files: self.keep_temp_files,
            dry_run: self.dry_run,
            verbosity: self.verbose,
            stop_before: self.stop_before(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mkvtomp4").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_are_left_to_settings() {
        let args = parse(&["movie.mkv"]);
        assert_eq!(args.files, vec![PathBuf::from("movie.mkv")]);
        assert_eq!(args.muxer(), None);
        assert_eq!(args.audio_bitrate, None);
        assert!(args.stop_before().is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn last_muxer_flag_wins() {
        assert_eq!(
            parse(&["--use-mp4box", "--use-mp4creator", "a.mkv"]).muxer(),
            Some(MuxerKind::Mp4creator)
        );
        assert_eq!(
            parse(&["--use-mp4creator", "--use-mp4box", "a.mkv"]).muxer(),
            Some(MuxerKind::Mp4box)
        );
    }

    #[test]
    fn verbose_is_counted() {
        assert_eq!(parse(&["-vvv", "a.mkv"]).verbose, 3);
        assert_eq!(parse(&["-v", "--verbose", "a.mkv"]).verbose, 2);
    }

    #[test]
    fn equals_syntax_and_negative_delay() {
        let args = parse(&[
            "--audio-delay-ms=-120",
            "--audio-bitrate=192",
            "--audio-channels=2",
            "--audio-codec=aac",
            "-o",
            "out.mp4",
            "a.mkv",
        ]);
        assert_eq!(args.audio_delay_ms, Some(-120));
        assert_eq!(args.audio_bitrate, Some(192));
        assert_eq!(args.audio_channels.as_deref(), Some("2"));
        assert_eq!(args.audio_codec.as_deref(), Some("aac"));
        assert_eq!(args.output, Some(PathBuf::from("out.mp4")));
    }

    #[test]
    fn every_stage_has_a_stop_flag() {
        for stage in Stage::ALL {
            let flag = format!("--stop-before-{}", stage.flag_name());
            let args = parse(&[flag.as_str(), "a.mkv"]);
            assert_eq!(args.stop_before(), vec![stage], "{}", flag);
        }
    }

    #[test]
    fn double_dash_ends_options() {
        let args = parse(&["-n", "--", "-weird.mkv"]);
        assert!(args.dry_run);
        assert_eq!(args.files, vec![PathBuf::from("-weird.mkv")]);
    }

    #[test]
    fn extra_positionals_are_accepted() {
        let args = parse(&["a.mkv", "b.mkv"]);
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn help_and_version_are_display_errors() {
        for flag in ["-h", "--help", "--usage"] {
            let err = Args::try_parse_from(["mkvtomp4", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{}", flag);
        }
        let err = Args::try_parse_from(["mkvtomp4", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = Args::try_parse_from(["mkvtomp4", "--bogus", "a.mkv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn request_carries_options() {
        let args = parse(&[
            "--use-mp4box",
            "--audio-delay-ms=100",
            "--keep-temp-files",
            "--fix-audio",
            "--stop-before-audio-mp4",
            "a.mkv",
        ]);
        let request = args.to_request(Path::new("a.mkv"), "mkvtomp4".to_string());
        assert_eq!(request.muxer, Some(MuxerKind::Mp4box));
        assert_eq!(request.audio_delay_ms, Some(100));
        assert!(request.keep_temp_files);
        assert!(request.fix_audio);
        assert_eq!(request.stop_before, vec![Stage::AudioMp4]);
    }

    #[test]
    fn version_comes_from_core() {
        use clap::CommandFactory;
        assert_eq!(Args::command().get_version(), Some(mkvtomp4_core::version()));
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
