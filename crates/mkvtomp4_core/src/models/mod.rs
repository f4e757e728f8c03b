//! Data models for mkvtomp4.
//!
//! - Enums for track roles, codecs, muxer backends and pipeline stages
//! - Track identification (`TrackId`, `TrackDescriptor`)

mod enums;
mod media;

pub use enums::{AudioCodec, MuxerKind, Stage, TrackType, VideoCodec};
pub use media::{TrackDescriptor, TrackId};
