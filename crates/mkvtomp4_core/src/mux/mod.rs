//! MP4 container muxing.
//!
//! Two interchangeable tools can build the container:
//!
//! | Operation | mp4creator                          | MP4Box                                   |
//! |-----------|-------------------------------------|------------------------------------------|
//! | video     | `-c <video> -rate <fps> <mp4>`      | `-add <video>#video:trackID=1 -hint -fps <fps> <mp4>` |
//! | hint      | `-hint=1 <mp4>`                     | (done with the video)                    |
//! | audio     | `-c <audio> -interleave -optimize <mp4>` | `-add <audio>#audio:trackID=2[:delay=N] <mp4>` |
//!
//! The backend is chosen once with [`create_backend`]; the pipeline only
//! sees the [`MuxBackend`] trait.

mod backend;
mod mp4box;
mod mp4creator;

pub use backend::{create_backend, MuxBackend};
pub use mp4box::Mp4Box;
pub use mp4creator::Mp4Creator;
