// src/runner/engine.rs

//! Sequential task runner.
//!
//! Presents tasks to an [`ExecutionStrategy`] one at a time, in the order
//! decided by the external task graph. Single-threaded and synchronous; no
//! cancellation is modelled at this layer.

use tracing::{debug, error, warn};

use crate::errors::Result;
use crate::runner::strategy::ExecutionStrategy;
use crate::runner::task::{ExecutionContext, Task};

/// Drives a sequence of tasks through a strategy.
pub struct TaskRunner {
    ctx: ExecutionContext,
}

impl TaskRunner {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ExecutionContext {
        &mut self.ctx
    }

    /// Run all tasks in order. Stops at the first error that neither a
    /// handler nor `continue_on_error` absorbs.
    pub fn run(&self, tasks: &[Task], strategy: &mut dyn ExecutionStrategy) -> Result<()> {
        for task in tasks {
            if !self.should_execute(task) {
                strategy.skip(task);
                continue;
            }
            self.run_one(task, strategy)?;
        }
        Ok(())
    }

    fn should_execute(&self, task: &Task) -> bool {
        match &task.criteria {
            Some(criteria) => criteria(&self.ctx),
            None => true,
        }
    }

    /// Run a single task: setup and teardown bracket `execute` exactly once;
    /// teardown and the finalizer run regardless of the outcome.
    fn run_one(&self, task: &Task, strategy: &mut dyn ExecutionStrategy) -> Result<()> {
        let outcome = match strategy.perform_setup(task.setup.as_ref(), &self.ctx) {
            Ok(()) => self.execute_with_error_policy(task, strategy),
            Err(err) => {
                // A failing setup means the action never ran; the error is
                // not subject to the task's continue-on-error policy.
                error!(task = %task.name, error = %err, "task setup failed");
                Err(err)
            }
        };

        let teardown = strategy.perform_teardown(task.teardown.as_ref(), &self.ctx);
        let finally = strategy.invoke_finally(task.finalizer.as_ref(), &self.ctx);

        outcome?;
        teardown?;
        finally?;
        Ok(())
    }

    fn execute_with_error_policy(
        &self,
        task: &Task,
        strategy: &mut dyn ExecutionStrategy,
    ) -> Result<()> {
        let Err(err) = strategy.execute(Some(task), &self.ctx) else {
            return Ok(());
        };

        error!(task = %task.name, error = %err, "task execution failed");

        if let Some(reporter) = &task.error_reporter {
            strategy.report_errors(reporter, &err);
        }

        if let Some(handler) = &task.error_handler {
            debug!(task = %task.name, "routing error through task handler");
            return strategy.handle_errors(handler, err);
        }

        if task.continue_on_error {
            warn!(task = %task.name, "continuing past failed task");
            return Ok(());
        }

        Err(err)
    }
}
