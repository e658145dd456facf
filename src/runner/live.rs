// src/runner/live.rs

//! Live execution: actions run for real, errors are routed through the
//! task's hooks.

use tracing::{debug, info, warn};

use crate::errors::{Result, TaskforgeError};
use crate::runner::strategy::ExecutionStrategy;
use crate::runner::task::{ErrorAction, ExecutionContext, Task, TaskAction};

/// The default strategy: runs every hook and the task action itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveStrategy;

impl LiveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionStrategy for LiveStrategy {
    fn perform_setup(
        &mut self,
        action: Option<&TaskAction>,
        ctx: &ExecutionContext,
    ) -> Result<()> {
        if let Some(action) = action {
            debug!("running task setup");
            action(ctx)?;
        }
        Ok(())
    }

    fn perform_teardown(
        &mut self,
        action: Option<&TaskAction>,
        ctx: &ExecutionContext,
    ) -> Result<()> {
        if let Some(action) = action {
            debug!("running task teardown");
            action(ctx)?;
        }
        Ok(())
    }

    fn execute(&mut self, task: Option<&Task>, ctx: &ExecutionContext) -> Result<()> {
        let Some(task) = task else {
            return Ok(());
        };
        info!(task = %task.name, "executing task");
        match &task.action {
            Some(action) => action(ctx),
            None => Ok(()),
        }
    }

    fn skip(&mut self, task: &Task) {
        info!(task = %task.name, "skipping task (criteria not met)");
    }

    fn report_errors(&mut self, reporter: &ErrorAction, error: &TaskforgeError) {
        // A failing reporter must not mask the original error.
        if let Err(report_err) = reporter(error) {
            warn!(error = %report_err, "error reporter itself failed");
        }
    }

    fn handle_errors(&mut self, handler: &ErrorAction, error: TaskforgeError) -> Result<()> {
        handler(&error)
    }

    fn invoke_finally(
        &mut self,
        action: Option<&TaskAction>,
        ctx: &ExecutionContext,
    ) -> Result<()> {
        if let Some(action) = action {
            debug!("running task finalizer");
            action(ctx)?;
        }
        Ok(())
    }
}
