// src/runner/strategy.rs

//! The execution-strategy contract.

use crate::errors::{Result, TaskforgeError};
use crate::runner::task::{ErrorAction, ExecutionContext, Task, TaskAction};

/// How a scheduled task is actually carried out.
///
/// The runner consumes exactly these seven operations, once per task:
/// setup and teardown bracket `execute` exactly once in the live variant;
/// `execute` is the only operation permitted to perform the task's real
/// work; `skip` must never invoke the action; `invoke_finally` runs
/// regardless of outcome.
///
/// This is a closed set with two implementations,
/// [`crate::runner::LiveStrategy`] and [`crate::runner::DryRunStrategy`].
pub trait ExecutionStrategy {
    /// Run a task's setup hook, if any.
    fn perform_setup(&mut self, action: Option<&TaskAction>, ctx: &ExecutionContext)
    -> Result<()>;

    /// Run a task's teardown hook, if any.
    fn perform_teardown(
        &mut self,
        action: Option<&TaskAction>,
        ctx: &ExecutionContext,
    ) -> Result<()>;

    /// Carry out the task itself. `None` is tolerated and does nothing.
    fn execute(&mut self, task: Option<&Task>, ctx: &ExecutionContext) -> Result<()>;

    /// Record that a task was skipped (criteria not met).
    fn skip(&mut self, task: &Task);

    /// Pass an execution error to the task's reporter hook.
    fn report_errors(&mut self, reporter: &ErrorAction, error: &TaskforgeError);

    /// Pass an execution error to the task's handler hook. The returned
    /// result decides whether the error propagates.
    fn handle_errors(&mut self, handler: &ErrorAction, error: TaskforgeError) -> Result<()>;

    /// Run a task's finalizer, if any.
    fn invoke_finally(&mut self, action: Option<&TaskAction>, ctx: &ExecutionContext)
    -> Result<()>;
}
