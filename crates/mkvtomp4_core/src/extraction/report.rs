//! Track report scanner.
//!
//! `mkvinfo` prints a tree of elements, one per line. Only a handful of
//! lines matter here:
//!
//! ```text
//! | + A track
//! |  + Track number: 1 (track ID for mkvmerge & mkvextract: 0)
//! |  + Track type: video
//! |  + Codec ID: V_MPEG4/ISO/AVC
//! |  + Default duration: 00:00:00.041708333 (23.976 frames/fields per second for a video track)
//! ```
//!
//! The scanner is a small state machine fed one line at a time:
//!
//! ```text
//! Idle ──number──▶ InTrack{id} ──type──▶ InTypedTrack{id, type}
//!   ▲                  │                        │
//!   └──────────────────┴────── number ──────────┘ (restarts at InTrack)
//! ```
//!
//! Codec lines are only meaningful in `InTypedTrack`, frame-rate lines only
//! while the type is video.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ReportError, ReportResult};
use crate::models::{AudioCodec, TrackDescriptor, TrackId, TrackType, VideoCodec};

static TRACK_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|  \+ Track number: (\d+)(?: \(track ID for mkvmerge & mkvextract: (\d+)\))?$")
        .expect("track number pattern")
});

static TRACK_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|  \+ Track type: (.*)$").expect("track type pattern"));

static CODEC_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|  \+ Codec ID: (.*)$").expect("codec id pattern"));

static FPS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\|  \+ Default duration: (?:\d+\.\d+ms|\d+:\d{2}:\d{2}\.\d+) \((\d+\.\d+) (?:fps|frames/fields per second) for a video track\)$",
    )
    .expect("default duration pattern")
});

static VIDEO_CODEC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:V_)?(MPEG4/ISO/AVC)$").expect("video codec pattern"));

static AUDIO_CODEC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:A_)?(DTS|AAC|AC3)$").expect("audio codec pattern"));

/// Track type as printed in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedType {
    Known(TrackType),
    /// Subtitles, buttons and anything else the pipeline ignores.
    Other(String),
}

impl ReportedType {
    fn parse(value: &str) -> Self {
        TrackType::from_report(value)
            .map(ReportedType::Known)
            .unwrap_or_else(|| ReportedType::Other(value.to_string()))
    }
}

/// Position of the scanner within the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any track entry.
    Idle,
    /// A track number was seen, its type not yet.
    InTrack { id: TrackId },
    /// Inside a track whose type is known.
    InTypedTrack { id: TrackId, track_type: ReportedType },
}

#[derive(Debug)]
struct VideoEntry {
    id: TrackId,
    codec: Option<VideoCodec>,
    fps: Option<String>,
}

#[derive(Debug)]
struct AudioEntry {
    id: TrackId,
    codec: Option<AudioCodec>,
}

/// Line-by-line scanner that selects one video and one audio track.
///
/// The first track of each role is selected; later ones are reported
/// as warnings. Every audio or video codec is checked against the
/// whitelist, and a codec outside it stops the scan.
#[derive(Debug)]
pub struct TrackScanner {
    state: ScanState,
    video: Option<VideoEntry>,
    audio: Option<AudioEntry>,
}

impl Default for TrackScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            video: None,
            audio: None,
        }
    }

    /// Current scan state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Consume one report line.
    pub fn feed(&mut self, line: &str) -> ReportResult<()> {
        if let Some(id) = parse_track_number(line) {
            tracing::debug!("mkvinfo: in track number: {}", id);
            self.state = ScanState::InTrack { id };
            return Ok(());
        }

        let id = match &self.state {
            ScanState::Idle => return Ok(()),
            ScanState::InTrack { id } | ScanState::InTypedTrack { id, .. } => *id,
        };

        if let Some(caps) = TRACK_TYPE_RE.captures(line) {
            let track_type = ReportedType::parse(&caps[1]);
            tracing::debug!("mkvinfo: in track type: {}", &caps[1]);
            self.enter_typed(id, &track_type);
            self.state = ScanState::InTypedTrack { id, track_type };
            return Ok(());
        }

        let ScanState::InTypedTrack {
            track_type: ReportedType::Known(track_type),
            ..
        } = &self.state
        else {
            return Ok(());
        };
        let track_type = *track_type;

        if let Some(caps) = CODEC_ID_RE.captures(line) {
            return self.record_codec(id, track_type, &caps[1]);
        }

        if track_type == TrackType::Video {
            if let Some(caps) = FPS_RE.captures(line) {
                if let Some(video) = self.video.as_mut().filter(|v| v.id == id) {
                    video.fps = Some(caps[1].to_string());
                }
            }
        }

        Ok(())
    }

    /// Finish the scan and build the descriptor.
    pub fn finish(self) -> ReportResult<TrackDescriptor> {
        let video = self.video.ok_or(ReportError::MissingTrack(TrackType::Video))?;
        let audio = self.audio.ok_or(ReportError::MissingTrack(TrackType::Audio))?;

        let video_codec = video.codec.ok_or(ReportError::MissingCodec {
            track: video.id,
            track_type: TrackType::Video,
        })?;
        let audio_codec = audio.codec.ok_or(ReportError::MissingCodec {
            track: audio.id,
            track_type: TrackType::Audio,
        })?;
        let fps = video.fps.ok_or(ReportError::MissingFrameRate(video.id))?;

        Ok(TrackDescriptor {
            video: video.id,
            audio: audio.id,
            video_codec,
            audio_codec,
            fps,
        })
    }

    fn enter_typed(&mut self, id: TrackId, track_type: &ReportedType) {
        match track_type {
            ReportedType::Known(TrackType::Video) => match &self.video {
                None => {
                    self.video = Some(VideoEntry {
                        id,
                        codec: None,
                        fps: None,
                    })
                }
                Some(first) if first.id != id => {
                    tracing::warn!("ignoring additional video track {} (using {})", id, first.id)
                }
                Some(_) => {}
            },
            ReportedType::Known(TrackType::Audio) => match &self.audio {
                None => self.audio = Some(AudioEntry { id, codec: None }),
                Some(first) if first.id != id => {
                    tracing::warn!("ignoring additional audio track {} (using {})", id, first.id)
                }
                Some(_) => {}
            },
            ReportedType::Other(name) => tracing::warn!("ignoring track type: {}", name),
        }
    }

    fn record_codec(&mut self, id: TrackId, track_type: TrackType, codec: &str) -> ReportResult<()> {
        let unsupported = || ReportError::UnsupportedCodec {
            track: id,
            track_type,
            codec: codec.to_string(),
        };

        match track_type {
            TrackType::Video => {
                let parsed = VIDEO_CODEC_RE
                    .captures(codec)
                    .and_then(|caps| VideoCodec::from_normalized(&caps[1]))
                    .ok_or_else(unsupported)?;
                if let Some(video) = self.video.as_mut().filter(|v| v.id == id) {
                    tracing::debug!("mkvinfo: found video_codec: {}", parsed);
                    video.codec = Some(parsed);
                }
            }
            TrackType::Audio => {
                let parsed = AUDIO_CODEC_RE
                    .captures(codec)
                    .and_then(|caps| AudioCodec::from_normalized(&caps[1]))
                    .ok_or_else(unsupported)?;
                if let Some(audio) = self.audio.as_mut().filter(|a| a.id == id) {
                    tracing::debug!("mkvinfo: found audio_codec: {}", parsed);
                    audio.codec = Some(parsed);
                }
            }
        }
        Ok(())
    }
}

fn parse_track_number(line: &str) -> Option<TrackId> {
    let caps = TRACK_NUMBER_RE.captures(line)?;
    let number = caps[1].parse().ok()?;
    let id = TrackId::new(number);
    match caps.get(2).and_then(|m| m.as_str().parse().ok()) {
        Some(extract_id) => Some(id.with_extract_id(extract_id)),
        None => Some(id),
    }
}

/// Scan a full report and select the video and audio tracks.
pub fn parse_report<'a, I>(lines: I) -> ReportResult<TrackDescriptor>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = TrackScanner::new();
    for line in lines {
        scanner.feed(line)?;
    }
    scanner.finish()
}
