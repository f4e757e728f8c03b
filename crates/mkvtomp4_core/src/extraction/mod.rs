//! Track inspection and extraction.
//!
//! - **Inspection**: run `mkvinfo` and pick one video and one audio track
//! - **Extraction**: pull a single elementary stream out with `mkvextract`
//!
//! Only H.264 video and AAC, AC3 or DTS audio are accepted. Any other codec
//! on an audio or video track stops the run before anything is written.
//!
//! # Usage
//!
//! ```ignore
//! use mkvtomp4_core::extraction::{extract_track, inspect};
//!
//! let tracks = inspect(&runner, "mkvinfo", Path::new("movie.mkv"))?;
//! extract_track(&runner, "mkvextract", Path::new("movie.mkv"), tracks.video,
//!               Path::new("movie.mkv.h264"), 0)?;
//! ```

mod mkvextract;
mod mkvinfo;
mod report;
mod types;

pub use mkvextract::{extract_track, extract_track_invocation};
pub use mkvinfo::{inspect, inspect_invocation};
pub use report::{parse_report, ReportedType, ScanState, TrackScanner};
pub use types::{ReportError, ReportResult};
