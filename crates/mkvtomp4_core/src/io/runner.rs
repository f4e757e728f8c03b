//! Command runner for external process execution.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

use super::invocation::Invocation;
use crate::logging::MessagePrefix;

/// Errors from running an external tool.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be located or launched.
    #[error("not found: {tool}: {source}")]
    ToolNotFound {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("{tool} failed with exit code {exit_code}: {stderr}")]
    ExecutionFailure {
        tool: String,
        exit_code: i32,
        stderr: String,
    },
}

impl CommandError {
    pub fn tool_not_found(tool: impl Into<String>, source: io::Error) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            source,
        }
    }

    pub fn execution_failure(
        tool: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ExecutionFailure {
            tool: tool.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// Result type for command execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Seam between the pipeline and the operating system.
///
/// `query` always executes and is reserved for read-only inspection.
/// `run` is used for every mutating step and only renders the command
/// line when the runner is in dry-run mode.
pub trait ToolRunner {
    /// Whether mutating invocations are only rendered.
    fn is_dry_run(&self) -> bool;

    /// Execute and return captured standard output.
    fn query(&self, invocation: &Invocation) -> CommandResult<String>;

    /// Print the shell-quoted command line instead of executing it.
    fn render(&self, invocation: &Invocation);

    /// Execute a mutating invocation, or render it in dry-run mode.
    ///
    /// Returns captured standard output (empty in dry-run mode).
    fn run(&self, invocation: &Invocation) -> CommandResult<String> {
        if self.is_dry_run() {
            self.render(invocation);
            return Ok(String::new());
        }
        self.query(invocation)
    }
}

/// Runs tools with `std::process::Command`, blocking until they exit.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    dry_run: bool,
}

impl CommandRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl ToolRunner for CommandRunner {
    fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn query(&self, invocation: &Invocation) -> CommandResult<String> {
        let tool = invocation.program();
        tracing::info!("{}", MessagePrefix::Command.format(&invocation.command_line()));

        let output = Command::new(tool)
            .args(invocation.arguments())
            .envs(invocation.environment().iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CommandError::tool_not_found(tool, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        for line in stdout.lines() {
            tracing::trace!("[{} stdout] {}", tool, line);
        }
        for line in stderr.lines() {
            tracing::debug!("[{} stderr] {}", tool, line);
        }

        if !output.status.success() {
            return Err(CommandError::execution_failure(
                tool,
                output.status.code().unwrap_or(-1),
                stderr.trim_end(),
            ));
        }

        Ok(stdout)
    }

    fn render(&self, invocation: &Invocation) {
        println!("{}", invocation.command_line());
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let runner = CommandRunner::new(false);
        let inv = Invocation::new("sh").arg("-c").arg("echo hello");
        assert_eq!(runner.run(&inv).unwrap(), "hello\n");
    }

    #[test]
    fn passes_environment() {
        let runner = CommandRunner::new(false);
        let inv = Invocation::new("sh")
            .arg("-c")
            .arg("printf %s \"$LC_ALL\"")
            .env("LC_ALL", "C");
        assert_eq!(runner.query(&inv).unwrap(), "C");
    }

    #[test]
    fn nonzero_exit_carries_stderr() {
        let runner = CommandRunner::new(false);
        let inv = Invocation::new("sh").arg("-c").arg("echo broken >&2; exit 3");
        match runner.run(&inv) {
            Err(CommandError::ExecutionFailure {
                tool,
                exit_code,
                stderr,
            }) => {
                assert_eq!(tool, "sh");
                assert_eq!(exit_code, 3);
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_tool_not_found() {
        let runner = CommandRunner::new(false);
        let inv = Invocation::new("mkvtomp4-no-such-tool");
        assert!(matches!(
            runner.query(&inv),
            Err(CommandError::ToolNotFound { .. })
        ));
    }

    #[test]
    fn dry_run_does_not_execute() {
        let runner = CommandRunner::new(true);
        // Would fail if executed.
        let inv = Invocation::new("mkvtomp4-no-such-tool").arg("");
        assert_eq!(runner.run(&inv).unwrap(), "");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_file_name_reaches_child() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::path::Path;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Path::new(OsStr::from_bytes(b"film\xff.mkv")));
        std::fs::write(&path, b"x").unwrap();

        let runner = CommandRunner::new(false);
        let inv = Invocation::new("test").arg("-f").path_arg(&path);
        assert!(runner.run(&inv).is_ok());
    }
}
