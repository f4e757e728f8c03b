//! mkvtomp4 core - conversion pipeline for H.264 Matroska files.
//!
//! This crate contains all business logic with zero CLI dependencies:
//! reading track metadata from `mkvinfo`, extracting elementary streams,
//! patching the H.264 level byte, transcoding audio and muxing everything
//! into an MP4 container with either `mp4creator` or `MP4Box`.
//!
//! All heavy lifting is delegated to external tools through
//! [`io::ToolRunner`], which also implements dry-run rendering.

pub mod config;
pub mod correction;
pub mod extraction;
pub mod io;
pub mod logging;
pub mod models;
pub mod mux;
pub mod orchestrator;
pub mod transcode;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
