//! H.264 level patch.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::io::{Invocation, ToolRunner};

/// Offset of the level byte in an extracted elementary stream.
pub const LEVEL_OFFSET: u64 = 7;

/// Level written at [`LEVEL_OFFSET`] (4.1).
pub const LEVEL: u8 = 0x29;

/// Flag that runs only this patch.
pub const CORRECT_PROFILE_ONLY_FLAG: &str = "--correct-profile-only";

/// Error type for the profile patch.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("failed to patch {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    pub fn io_error(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for the profile patch.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Command that replays the patch on its own.
pub fn replay_invocation(program: &str, video: &Path) -> Invocation {
    Invocation::new(program)
        .arg(CORRECT_PROFILE_ONLY_FLAG)
        .path_arg(video)
}

/// Overwrite the level byte of `video`.
///
/// In dry-run mode the file is left alone and the standalone replay
/// command is printed instead.
pub fn correct_profile(runner: &dyn ToolRunner, program: &str, video: &Path) -> ProfileResult<()> {
    if runner.is_dry_run() {
        runner.render(&replay_invocation(program, video));
        return Ok(());
    }

    tracing::info!(
        "patching level byte of {} to {:#04x}",
        video.display(),
        LEVEL
    );
    write_level(video).map_err(|e| ProfileError::io_error(video, e))
}

fn write_level(video: &Path) -> std::io::Result<()> {
    let mut file = OpenOptions::new().read(true).write(true).open(video)?;
    file.seek(SeekFrom::Start(LEVEL_OFFSET))?;
    file.write_all(&[LEVEL])?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CommandRunner;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: [u8; 12] = [0, 0, 0, 1, 0x67, 0x64, 0x00, 0x33, 0xac, 0x2c, 0xa4, 0x01];

    #[test]
    fn patches_only_byte_seven() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("movie.mkv.h264");
        fs::write(&path, SAMPLE).unwrap();

        correct_profile(&CommandRunner::new(false), "mkvtomp4", &path).unwrap();

        let patched = fs::read(&path).unwrap();
        assert_eq!(patched.len(), SAMPLE.len());
        assert_eq!(patched[7], LEVEL);
        for (i, (a, b)) in SAMPLE.iter().zip(patched.iter()).enumerate() {
            if i != 7 {
                assert_eq!(a, b, "byte {} changed", i);
            }
        }
    }

    #[test]
    fn patch_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("movie.h264");
        fs::write(&path, SAMPLE).unwrap();

        let runner = CommandRunner::new(false);
        correct_profile(&runner, "mkvtomp4", &path).unwrap();
        let once = fs::read(&path).unwrap();
        correct_profile(&runner, "mkvtomp4", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), once);
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("movie.h264");
        fs::write(&path, SAMPLE).unwrap();

        correct_profile(&CommandRunner::new(true), "mkvtomp4", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.h264");

        let err = correct_profile(&CommandRunner::new(false), "mkvtomp4", &path).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn replay_command_is_quoted() {
        let inv = replay_invocation("mkvtomp4", Path::new("my movie.mkv.h264"));
        assert_eq!(
            inv.command_line(),
            "mkvtomp4 --correct-profile-only 'my movie.mkv.h264'"
        );
    }
}
