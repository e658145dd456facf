// src/runner/dry_run.rs

//! Dry-run execution: enumerate tasks without performing any work.

use std::io::{self, Write};

use tracing::debug;

use crate::errors::{Result, TaskforgeError};
use crate::runner::strategy::ExecutionStrategy;
use crate::runner::task::{ErrorAction, ExecutionContext, Task, TaskAction};

/// Previews a run as numbered `"<ordinal>. <name>"` lines.
///
/// Setup, teardown, skip reporting and every error hook are suppressed: no
/// real work happens, so there is nothing to clean up or report. The ordinal
/// counter starts at 1, increments once per non-null task, and is never
/// reset within a session.
pub struct DryRunStrategy<W: Write> {
    counter: u64,
    out: W,
}

impl DryRunStrategy<io::Stdout> {
    /// Preview to stdout, the default for the CLI.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DryRunStrategy<W> {
    pub fn new(out: W) -> Self {
        Self { counter: 1, out }
    }
}

impl<W: Write> ExecutionStrategy for DryRunStrategy<W> {
    fn perform_setup(
        &mut self,
        _action: Option<&TaskAction>,
        _ctx: &ExecutionContext,
    ) -> Result<()> {
        Ok(())
    }

    fn perform_teardown(
        &mut self,
        _action: Option<&TaskAction>,
        _ctx: &ExecutionContext,
    ) -> Result<()> {
        Ok(())
    }

    fn execute(&mut self, task: Option<&Task>, _ctx: &ExecutionContext) -> Result<()> {
        if let Some(task) = task {
            writeln!(self.out, "{}. {}", self.counter, task.name)
                .map_err(TaskforgeError::from)?;
            self.counter += 1;
        }
        Ok(())
    }

    fn skip(&mut self, task: &Task) {
        // Skipped tasks are not part of the preview.
        debug!(task = %task.name, "dry-run: task skipped, not reported");
    }

    fn report_errors(&mut self, _reporter: &ErrorAction, _error: &TaskforgeError) {}

    fn handle_errors(&mut self, _handler: &ErrorAction, _error: TaskforgeError) -> Result<()> {
        Ok(())
    }

    fn invoke_finally(
        &mut self,
        _action: Option<&TaskAction>,
        _ctx: &ExecutionContext,
    ) -> Result<()> {
        Ok(())
    }
}
