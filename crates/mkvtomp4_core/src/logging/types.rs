//! Logging types and configuration.

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level debugging (tool stdout).
    Trace,
    /// Debug information (tool stderr, scan state).
    Debug,
    /// General information (commands, stage markers).
    Info,
    /// Warnings only.
    #[default]
    Warn,
    /// Errors.
    Error,
}

impl LogLevel {
    /// Raise the level by one step per `-v`, saturating at trace.
    pub fn raised_by(self, verbosity: u8) -> Self {
        let mut level = self;
        for _ in 0..verbosity {
            level = match level {
                LogLevel::Error => LogLevel::Warn,
                LogLevel::Warn => LogLevel::Info,
                LogLevel::Info => LogLevel::Debug,
                LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
            };
        }
        level
    }
}

/// Message prefix types for consistent formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePrefix {
    /// Shell command: `$ command`
    Command,
    /// Stage marker: `=== Stage ===`
    Stage,
    /// Success: `[SUCCESS]`
    Success,
}

impl MessagePrefix {
    /// Format a message with this prefix.
    pub fn format(&self, message: &str) -> String {
        match self {
            MessagePrefix::Command => format!("$ {}", message),
            MessagePrefix::Stage => format!("=== {} ===", message),
            MessagePrefix::Success => format!("[SUCCESS] {}", message),
        }
    }
}
