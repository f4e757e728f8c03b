//! GPAC `MP4Box` backend.

use std::path::Path;

use super::backend::MuxBackend;
use crate::io::Invocation;
use crate::models::MuxerKind;

/// Track ID given to the video stream.
const VIDEO_TRACK_ID: u32 = 1;
/// Track ID given to the audio stream.
const AUDIO_TRACK_ID: u32 = 2;

#[derive(Debug, Clone)]
pub struct Mp4Box {
    program: String,
}

impl Mp4Box {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MuxBackend for Mp4Box {
    fn kind(&self) -> MuxerKind {
        MuxerKind::Mp4box
    }

    fn add_video(&self, output: &Path, video: &Path, fps: &str) -> Invocation {
        Invocation::new(&self.program)
            .arg("-add")
            .path_word_arg("", video, &format!("#video:trackID={}", VIDEO_TRACK_ID))
            .arg("-hint")
            .arg("-fps")
            .arg(fps)
            .path_arg(output)
    }

    // Hinting happens in add_video.
    fn add_hint(&self, _output: &Path) -> Option<Invocation> {
        None
    }

    fn add_audio(&self, output: &Path, audio: &Path, delay_ms: Option<i64>) -> Invocation {
        let mut selector = format!("#audio:trackID={}", AUDIO_TRACK_ID);
        if let Some(delay) = delay_ms {
            selector.push_str(&format!(":delay={}", delay));
        }
        Invocation::new(&self.program)
            .arg("-add")
            .path_word_arg("", audio, &selector)
            .path_arg(output)
    }

    fn supports_audio_delay(&self) -> bool {
        true
    }
}
