//! Configuration for mkvtomp4.
//!
//! This module provides:
//! - TOML settings file with logical sections (tools, audio, mux, logging)
//! - `RunConfig`, the immutable per-run configuration resolved from the
//!   command line and the settings, validated before any work starts
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use mkvtomp4_core::config::{ConfigManager, RunConfig, RunRequest};
//!
//! let mut config = ConfigManager::new(Some(PathBuf::from("mkvtomp4.toml")));
//! config.load().unwrap();
//!
//! let request = RunRequest {
//!     source: PathBuf::from("movie.mkv"),
//!     program: "mkvtomp4".to_string(),
//!     ..Default::default()
//! };
//! let run = RunConfig::resolve(request, config.settings()).unwrap();
//! println!("Output: {}", run.output.display());
//! ```

mod manager;
mod run;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use run::{default_output_path, AudioOptions, RunConfig, RunRequest, OUTPUT_EXTENSION};
pub use settings::{AudioSettings, LoggingSettings, MuxSettings, Settings, ToolSettings};
