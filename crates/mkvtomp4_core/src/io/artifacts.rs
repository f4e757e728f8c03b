//! Temporary files owned by a run.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Removes registered files when dropped.
///
/// A disarmed guard only records paths; that covers `--keep-temp-files`
/// and dry runs, where nothing was written. Removal is best effort: a
/// file that was never created is skipped silently, other failures are
/// logged at debug level.
#[derive(Debug)]
pub struct TempArtifacts {
    paths: Vec<PathBuf>,
    armed: bool,
}

impl TempArtifacts {
    pub fn new(armed: bool) -> Self {
        Self {
            paths: Vec::new(),
            armed,
        }
    }

    /// Track a file for removal.
    pub fn register(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Leave every registered file on disk.
    pub fn keep(&mut self) {
        self.armed = false;
    }

    /// Remove registered files now. Safe to call more than once.
    pub fn cleanup(&mut self) {
        let paths = std::mem::take(&mut self.paths);
        if !self.armed {
            if !paths.is_empty() {
                tracing::debug!("keeping {} temporary file(s)", paths.len());
            }
            return;
        }
        for path in &paths {
            remove_artifact(path);
        }
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn remove_artifact(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("removed {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::debug!("could not remove {}: {}", path.display(), e),
    }
}
