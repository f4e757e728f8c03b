//! External process plumbing.
//!
//! - **Invocation**: program + arguments + environment overrides
//! - **Runner**: executes invocations or renders them for a dry run
//! - **Shell**: POSIX quoting used for rendering and logging
//! - **Paths**: names of artifacts derived from the source file
//! - **Artifacts**: drop guard removing temporary files

mod artifacts;
mod invocation;
mod paths;
mod runner;
pub mod shell;
#[cfg(test)]
pub(crate) mod testing;

pub use artifacts::TempArtifacts;
pub use invocation::Invocation;
pub use paths::append_extension;
pub use runner::{CommandError, CommandResult, CommandRunner, ToolRunner};
