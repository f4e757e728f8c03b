//! Audio conversion with ffmpeg.

use std::path::Path;

use crate::config::AudioOptions;
use crate::io::{append_extension, CommandResult, Invocation, TempArtifacts, ToolRunner};

/// Encoder used for the intermediate file in fix mode.
pub const INTERMEDIATE_CODEC: &str = "pcm_s16le";

/// Extension of the intermediate file in fix mode.
pub const INTERMEDIATE_EXTENSION: &str = "wav";

/// Channel count as passed to `-ac`. `5.1` means six channels.
pub fn channel_argument(channels: &str) -> &str {
    if channels == "5.1" {
        "6"
    } else {
        channels
    }
}

/// Build `ffmpeg [-v N] -i <input> -ac <ch> -acodec <codec> -ab <rate>k <output>`.
///
/// Verbosity above one is forwarded as ffmpeg's own `-v`, one level lower.
pub fn convert_invocation(
    ffmpeg: &str,
    input: &Path,
    output: &Path,
    codec: &str,
    audio: &AudioOptions,
    verbosity: u8,
) -> Invocation {
    let mut inv = Invocation::new(ffmpeg);
    if verbosity > 1 {
        inv = inv.arg("-v").arg((verbosity - 1).to_string());
    }
    inv.arg("-i")
        .path_arg(input)
        .arg("-ac")
        .arg(channel_argument(&audio.channels))
        .arg("-acodec")
        .arg(codec)
        .arg("-ab")
        .arg(format!("{}k", audio.bitrate))
        .path_arg(output)
}

/// Converts extracted audio to the container's codec.
pub struct AudioTranscoder<'a> {
    runner: &'a dyn ToolRunner,
    ffmpeg: &'a str,
    audio: &'a AudioOptions,
    verbosity: u8,
    keep_temp_files: bool,
}

impl<'a> AudioTranscoder<'a> {
    pub fn new(runner: &'a dyn ToolRunner, ffmpeg: &'a str, audio: &'a AudioOptions) -> Self {
        Self {
            runner,
            ffmpeg,
            audio,
            verbosity: 0,
            keep_temp_files: false,
        }
    }

    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn keep_temp_files(mut self, keep: bool) -> Self {
        self.keep_temp_files = keep;
        self
    }

    /// Convert `input` into `output`.
    ///
    /// In fix mode the audio is decoded to `<output>.wav` first and encoded
    /// from there. The intermediate file is removed on every path out of
    /// this function unless temporary files are kept.
    pub fn convert(&self, input: &Path, output: &Path) -> CommandResult<()> {
        if !self.audio.fix {
            return self.encode(input, output, &self.audio.codec);
        }

        let intermediate = append_extension(output, INTERMEDIATE_EXTENSION);
        let mut artifacts = TempArtifacts::new(!self.keep_temp_files && !self.runner.is_dry_run());
        artifacts.register(&intermediate);

        self.encode(input, &intermediate, INTERMEDIATE_CODEC)?;
        self.encode(&intermediate, output, &self.audio.codec)
    }

    fn encode(&self, input: &Path, output: &Path, codec: &str) -> CommandResult<()> {
        let inv = convert_invocation(self.ffmpeg, input, output, codec, self.audio, self.verbosity);
        self.runner.run(&inv)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::testing::RecordingRunner;
    use std::fs;
    use tempfile::tempdir;

    fn options(fix: bool) -> AudioOptions {
        AudioOptions {
            bitrate: 328,
            channels: "5.1".to_string(),
            codec: "libfaac".to_string(),
            delay_ms: None,
            fix,
        }
    }

    #[test]
    fn five_one_becomes_six_channels() {
        assert_eq!(channel_argument("5.1"), "6");
        assert_eq!(channel_argument("2"), "2");
        assert_eq!(channel_argument("6"), "6");
    }

    #[test]
    fn invocation_layout() {
        let inv = convert_invocation(
            "ffmpeg",
            Path::new("movie.mkv.ac3"),
            Path::new("movie.mkv.ac3.aac"),
            "libfaac",
            &options(false),
            0,
        );
        assert_eq!(
            inv.command_line(),
            "ffmpeg -i movie.mkv.ac3 -ac 6 -acodec libfaac -ab 328k movie.mkv.ac3.aac"
        );
    }

    #[test]
    fn verbosity_is_offset_by_one() {
        let audio = options(false);
        let quiet = convert_invocation("ffmpeg", Path::new("a"), Path::new("b"), "aac", &audio, 1);
        assert_eq!(quiet.arguments()[0], "-i");

        let loud = convert_invocation("ffmpeg", Path::new("a"), Path::new("b"), "aac", &audio, 3);
        assert_eq!(&loud.arguments()[..2], &["-v", "2"]);
    }

    #[test]
    fn plain_conversion_is_one_call() {
        let runner = RecordingRunner::new();
        let audio = options(false);
        AudioTranscoder::new(&runner, "ffmpeg", &audio)
            .convert(Path::new("in.dts"), Path::new("in.dts.aac"))
            .unwrap();
        assert_eq!(runner.executed().len(), 1);
    }

    #[test]
    fn fix_mode_goes_through_wav_and_removes_it() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("movie.mkv.ac3");
        let output = dir.path().join("movie.mkv.ac3.aac");
        fs::write(&input, b"ac3").unwrap();

        let runner = RecordingRunner::new().creating_outputs();
        let audio = options(true);
        AudioTranscoder::new(&runner, "ffmpeg", &audio)
            .convert(&input, &output)
            .unwrap();

        let calls = runner.executed();
        assert_eq!(calls.len(), 2);
        let wav = append_extension(&output, "wav");
        assert_eq!(calls[0].arguments().last(), Some(&wav.clone().into_os_string()));
        assert!(calls[0].arguments().iter().any(|a| a == INTERMEDIATE_CODEC));
        assert_eq!(calls[1].arguments()[1], wav.clone().into_os_string());
        assert!(calls[1].arguments().iter().any(|a| a == "libfaac"));
        assert!(!wav.exists());
        assert!(output.exists());
    }

    #[test]
    fn fix_mode_removes_wav_when_second_pass_fails() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("movie.mkv.dts.aac");
        let wav = append_extension(&output, "wav");
        fs::write(&wav, b"partial").unwrap();

        let runner = RecordingRunner::new().failing("ffmpeg");
        let audio = options(true);
        let result = AudioTranscoder::new(&runner, "ffmpeg", &audio)
            .convert(&dir.path().join("movie.mkv.dts"), &output);

        assert!(result.is_err());
        assert!(!wav.exists());
    }

    #[test]
    fn fix_mode_keeps_wav_on_request() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("movie.mkv.ac3.aac");

        let runner = RecordingRunner::new().creating_outputs();
        let audio = options(true);
        AudioTranscoder::new(&runner, "ffmpeg", &audio)
            .keep_temp_files(true)
            .convert(&dir.path().join("movie.mkv.ac3"), &output)
            .unwrap();

        assert!(append_extension(&output, "wav").exists());
    }

    #[test]
    fn dry_run_renders_both_passes() {
        let runner = RecordingRunner::new().dry_run();
        let audio = options(true);
        AudioTranscoder::new(&runner, "ffmpeg", &audio)
            .convert(Path::new("in.ac3"), Path::new("in.ac3.aac"))
            .unwrap();
        assert!(runner.executed().is_empty());
        assert_eq!(runner.rendered().len(), 2);
    }
}
