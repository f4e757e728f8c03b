//! mpeg4ip `mp4creator` backend.

use std::path::Path;

use super::backend::MuxBackend;
use crate::io::Invocation;
use crate::models::MuxerKind;

#[derive(Debug, Clone)]
pub struct Mp4Creator {
    program: String,
}

impl Mp4Creator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MuxBackend for Mp4Creator {
    fn kind(&self) -> MuxerKind {
        MuxerKind::Mp4creator
    }

    fn add_video(&self, output: &Path, video: &Path, fps: &str) -> Invocation {
        Invocation::new(&self.program)
            .arg("-c")
            .path_arg(video)
            .arg("-rate")
            .arg(fps)
            .path_arg(output)
    }

    fn add_hint(&self, output: &Path) -> Option<Invocation> {
        Some(Invocation::new(&self.program).arg("-hint=1").path_arg(output))
    }

    /// mp4creator has no delay option; the combination is rejected when
    /// the run configuration is resolved, so `delay_ms` is always `None`.
    fn add_audio(&self, output: &Path, audio: &Path, _delay_ms: Option<i64>) -> Invocation {
        Invocation::new(&self.program)
            .arg("-c")
            .path_arg(audio)
            .arg("-interleave")
            .arg("-optimize")
            .path_arg(output)
    }

    fn supports_audio_delay(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_lines() {
        let muxer = Mp4Creator::new("mp4creator");
        let out = Path::new("movie.mp4");

        assert_eq!(
            muxer.add_video(out, Path::new("movie.mkv.h264"), "23.976").command_line(),
            "mp4creator -c movie.mkv.h264 -rate 23.976 movie.mp4"
        );
        assert_eq!(
            muxer.add_hint(out).unwrap().command_line(),
            "mp4creator -hint=1 movie.mp4"
        );
        assert_eq!(
            muxer.add_audio(out, Path::new("movie.mkv.aac"), None).command_line(),
            "mp4creator -c movie.mkv.aac -interleave -optimize movie.mp4"
        );
    }
}
