//! Naming of artifacts derived from an input file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Append `.ext` to the full file name, keeping any existing extension.
///
/// `movie.mkv` + `h264` gives `movie.mkv.h264`.
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
