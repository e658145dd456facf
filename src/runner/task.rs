// src/runner/task.rs

//! Task data model and the shared execution context.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::env::Environment;
use crate::errors::{Result, TaskforgeError};
use crate::fs::FileSystem;

/// Canonical task name type used throughout the runner.
pub type TaskName = String;

/// A unit of executable work. Receives the shared context, read-only.
pub type TaskAction = Box<dyn Fn(&ExecutionContext) -> Result<()>>;

/// Error hook attached to a task.
///
/// Returning `Ok(())` means the error was handled; returning `Err` from an
/// error *handler* re-raises and aborts the run.
pub type ErrorAction = Box<dyn Fn(&TaskforgeError) -> Result<()>>;

/// Predicate deciding whether a task executes or is skipped.
pub type Criteria = Box<dyn Fn(&ExecutionContext) -> bool>;

/// Environment and state handed into task actions.
///
/// Shared and read-mostly; the strategy never owns it. Resolved tool paths
/// are filled in once by the pre-flight check before any task runs.
#[derive(Debug)]
pub struct ExecutionContext {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn Environment>,
    working_dir: PathBuf,
    tool_paths: HashMap<String, PathBuf>,
}

impl ExecutionContext {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn Environment>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            env,
            working_dir: working_dir.into(),
            tool_paths: HashMap::new(),
        }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn env(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Record the resolved location of an external tool.
    pub fn insert_tool_path(&mut self, tool: impl Into<String>, path: PathBuf) {
        self.tool_paths.insert(tool.into(), path);
    }

    /// Location of a previously resolved tool, if any.
    pub fn tool_path(&self, tool: &str) -> Option<&Path> {
        self.tool_paths.get(tool).map(PathBuf::as_path)
    }

    /// All resolved tools, in arbitrary order.
    pub fn tool_paths(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.tool_paths
            .iter()
            .map(|(tool, path)| (tool.as_str(), path.as_path()))
    }
}

/// A scheduled build task, consumed read-only by the execution strategy.
///
/// Created by the task-graph builder (or, in the CLI, straight from the
/// manifest); the runner presents tasks in the order it receives them.
pub struct Task {
    pub name: TaskName,
    pub action: Option<TaskAction>,
    pub criteria: Option<Criteria>,
    pub continue_on_error: bool,
    pub setup: Option<TaskAction>,
    pub teardown: Option<TaskAction>,
    pub error_reporter: Option<ErrorAction>,
    pub error_handler: Option<ErrorAction>,
    pub finalizer: Option<TaskAction>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>) -> Self {
        Self {
            name: name.into(),
            action: None,
            criteria: None,
            continue_on_error: false,
            setup: None,
            teardown: None,
            error_reporter: None,
            error_handler: None,
            finalizer: None,
        }
    }

    pub fn with_action(mut self, action: TaskAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn continue_on_error(mut self, value: bool) -> Self {
        self.continue_on_error = value;
        self
    }

    pub fn with_setup(mut self, action: TaskAction) -> Self {
        self.setup = Some(action);
        self
    }

    pub fn with_teardown(mut self, action: TaskAction) -> Self {
        self.teardown = Some(action);
        self
    }

    pub fn with_error_reporter(mut self, action: ErrorAction) -> Self {
        self.error_reporter = Some(action);
        self
    }

    pub fn with_error_handler(mut self, action: ErrorAction) -> Self {
        self.error_handler = Some(action);
        self
    }

    pub fn with_finalizer(mut self, action: TaskAction) -> Self {
        self.finalizer = Some(action);
        self
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("continue_on_error", &self.continue_on_error)
            .finish_non_exhaustive()
    }
}
