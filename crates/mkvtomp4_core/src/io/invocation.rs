//! Description of one external tool call.

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

use super::shell;

/// A program, its arguments and environment overrides.
///
/// Arguments are kept as `OsString` so file names reach the child process
/// byte for byte; only rendering is lossy.
///
/// Built by the extraction, transcode and mux wrappers and handed to a
/// [`ToolRunner`](super::ToolRunner), which either executes it or renders
/// it for a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
    env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Append one argument (builder pattern).
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// Append `prefix`, `path` and `suffix` as a single argument.
    ///
    /// Used for the `<id>:<file>` and `<file>#<selector>` words of
    /// mkvextract and MP4Box.
    pub fn path_word_arg(self, prefix: &str, path: &Path, suffix: &str) -> Self {
        let mut word = OsString::from(prefix);
        word.push(path.as_os_str());
        word.push(suffix);
        self.arg(word)
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn environment(&self) -> &[(String, String)] {
        &self.env
    }

    /// Shell-quoted command line, environment assignments first.
    pub fn command_line(&self) -> String {
        let env = self.env.iter().map(|(k, v)| format!("{}={}", k, shell::quote(v)));
        let args = self.args.iter().map(|a| a.to_string_lossy());
        let words = shell::join(std::iter::once(Cow::Borrowed(self.program.as_str())).chain(args));
        env.chain(std::iter::once(words))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}
