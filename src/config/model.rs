// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level manifest as read from a TOML file.
///
/// ```toml
/// [tool.nuget]
/// executable = "nuget.exe"
/// env = "NUGET_EXE"
///
/// [task.restore]
/// cmd = "{tool:nuget} restore"
/// tool = "nuget"
///
/// [task.build]
/// cmd = "cargo build"
/// continue_on_error = true
/// ```
///
/// All sections are optional at parse time; validation requires at least one
/// task. Task presentation order is map order; the dependency graph that
/// decides a real ordering lives outside this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct RawManifest {
    /// External tools from `[tool.<name>]`.
    #[serde(default)]
    pub tool: BTreeMap<String, ToolConfig>,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"build"`, `"restore"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// Validated manifest. Construct via `TryFrom<RawManifest>`.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub tool: BTreeMap<String, ToolConfig>,
    pub task: BTreeMap<String, TaskConfig>,
}

impl Manifest {
    /// Internal constructor used after validation has passed.
    pub(crate) fn new_unchecked(
        tool: BTreeMap<String, ToolConfig>,
        task: BTreeMap<String, TaskConfig>,
    ) -> Self {
        Self { tool, task }
    }
}

/// `[tool.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// File name of the executable probed on disk (e.g. `nuget.exe`).
    pub executable: String,

    /// Override environment variable; if unset, derived from the tool name
    /// as `<NAME>_EXE`.
    #[serde(default)]
    pub env: Option<String>,
}

impl ToolConfig {
    /// Effective override variable name for a tool called `name`.
    pub fn effective_env(&self, name: &str) -> String {
        match &self.env {
            Some(env) => env.clone(),
            None => format!("{}_EXE", name.to_uppercase()),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// The command to execute.
    pub cmd: String,

    /// Proceed to the next task even if this one fails.
    #[serde(default)]
    pub continue_on_error: bool,

    /// Optional command run before `cmd` (live runs only).
    #[serde(default)]
    pub setup: Option<String>,

    /// Optional command run after `cmd`, even when it failed (live runs
    /// only).
    #[serde(default)]
    pub teardown: Option<String>,

    /// Optional guaranteed-cleanup command, run last regardless of outcome.
    #[serde(default, rename = "finally")]
    pub finalizer: Option<String>,

    /// Skip this task unless the given file exists.
    #[serde(default)]
    pub only_if_file: Option<String>,

    /// Name of a `[tool.<name>]` entry this task needs; resolved before the
    /// run starts and substituted for `{tool:<name>}` in commands.
    #[serde(default)]
    pub tool: Option<String>,
}
