//! Scripted runner for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::{CommandError, CommandResult, Invocation, ToolRunner};

/// Stand-in for an elementary stream, long enough for the level patch.
pub const FAKE_STREAM: [u8; 12] = [0, 0, 0, 1, 0x67, 0x64, 0x00, 0x33, 0xac, 0x2c, 0xa4, 0x01];

/// Records invocations instead of spawning processes.
///
/// Canned stdout can be set per program. With `create_outputs` the file
/// a tool would have written is created, so later steps find it on disk.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    dry_run: bool,
    create_outputs: bool,
    responses: HashMap<String, String>,
    fail_on: Option<String>,
    executed: RefCell<Vec<Invocation>>,
    rendered: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn creating_outputs(mut self) -> Self {
        self.create_outputs = true;
        self
    }

    pub fn respond(mut self, program: &str, stdout: &str) -> Self {
        self.responses.insert(program.to_string(), stdout.to_string());
        self
    }

    /// Make every call of `program` exit with status 1.
    pub fn failing(mut self, program: &str) -> Self {
        self.fail_on = Some(program.to_string());
        self
    }

    pub fn executed(&self) -> Vec<Invocation> {
        self.executed.borrow().clone()
    }

    pub fn rendered(&self) -> Vec<Invocation> {
        self.rendered.borrow().clone()
    }

    /// Programs executed, in order.
    pub fn executed_programs(&self) -> Vec<String> {
        self.executed
            .borrow()
            .iter()
            .map(|inv| inv.program().to_string())
            .collect()
    }

    fn output_of(invocation: &Invocation) -> Option<PathBuf> {
        let last = invocation.arguments().last()?;
        if invocation.program().ends_with("mkvextract") {
            let (_, path) = last.to_str()?.split_once(':')?;
            return Some(PathBuf::from(path));
        }
        Some(PathBuf::from(last))
    }
}

impl ToolRunner for RecordingRunner {
    fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn query(&self, invocation: &Invocation) -> CommandResult<String> {
        self.executed.borrow_mut().push(invocation.clone());

        if self.fail_on.as_deref() == Some(invocation.program()) {
            return Err(CommandError::execution_failure(
                invocation.program(),
                1,
                "scripted failure",
            ));
        }

        if let Some(stdout) = self.responses.get(invocation.program()) {
            return Ok(stdout.clone());
        }

        if self.create_outputs {
            if let Some(path) = Self::output_of(invocation) {
                if !path.exists() {
                    let _ = fs::write(&path, FAKE_STREAM);
                }
            }
        }
        Ok(String::new())
    }

    fn render(&self, invocation: &Invocation) {
        self.rendered.borrow_mut().push(invocation.clone());
    }
}
