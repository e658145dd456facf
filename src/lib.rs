// src/lib.rs

pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod runner;
pub mod tools;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::Manifest;
use crate::env::{Environment, RealEnvironment};
use crate::errors::{Result, TaskforgeError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::runner::{
    DryRunStrategy, ExecutionContext, LiveStrategy, Task, TaskRunner, shell_action,
};
use crate::tools::{LayeredToolResolver, ToolResolver, ToolSpec};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading
/// - pre-flight tool resolution
/// - the task runner with the selected execution strategy
pub fn run(args: CliArgs) -> Result<()> {
    let manifest_path = PathBuf::from(&args.config);
    let manifest = load_and_validate(&manifest_path)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let env: Arc<dyn Environment> = Arc::new(RealEnvironment);
    let root = manifest_root_dir(&manifest_path);

    let mut ctx = ExecutionContext::new(Arc::clone(&fs), Arc::clone(&env), root.clone());

    // Pre-flight: resolve every tool referenced by a task before anything
    // runs. A missing tool fails the run even in dry-run mode; the preview
    // itself never executes task actions.
    resolve_referenced_tools(&manifest, &fs, &env, &root, &mut ctx)?;

    let tasks = build_tasks(&manifest, &ctx)?;
    info!(count = tasks.len(), dry_run = args.dry_run, "starting run");

    let runner = TaskRunner::new(ctx);

    if args.dry_run {
        let mut strategy = DryRunStrategy::stdout();
        runner.run(&tasks, &mut strategy)
    } else {
        let mut strategy = LiveStrategy::new();
        runner.run(&tasks, &mut strategy)
    }
}

/// Resolve each tool some task references, caching the result in the
/// execution context for placeholder substitution and task actions.
fn resolve_referenced_tools(
    manifest: &Manifest,
    fs: &Arc<dyn FileSystem>,
    env: &Arc<dyn Environment>,
    root: &Path,
    ctx: &mut ExecutionContext,
) -> Result<()> {
    let referenced: BTreeSet<&String> = manifest
        .task
        .values()
        .filter_map(|task| task.tool.as_ref())
        .collect();

    for name in referenced {
        // Validation guarantees the [tool.<name>] section exists.
        let tool_cfg = &manifest.tool[name];
        let spec = ToolSpec::new(name, &tool_cfg.executable, tool_cfg.effective_env(name));

        let mut resolver =
            LayeredToolResolver::new(spec, Arc::clone(fs), Arc::clone(env)).with_root(root);
        let path = resolver.resolve_tool_path()?;

        debug!(tool = %name, path = %path.display(), "pre-flight tool resolution");
        ctx.insert_tool_path(name.clone(), path);
    }

    Ok(())
}

/// Turn manifest entries into runnable tasks, in map order.
///
/// The dependency graph that decides a real ordering is built elsewhere;
/// the CLI simply presents tasks in the order the manifest yields them.
fn build_tasks(manifest: &Manifest, ctx: &ExecutionContext) -> Result<Vec<Task>> {
    let mut tasks = Vec::with_capacity(manifest.task.len());

    for (name, cfg) in manifest.task.iter() {
        let cmd = substitute_tool_paths(name, &cfg.cmd, ctx)?;
        let mut task = Task::new(name.clone())
            .with_action(shell_action(name, &cmd))
            .continue_on_error(cfg.continue_on_error);

        if let Some(setup) = &cfg.setup {
            let setup = substitute_tool_paths(name, setup, ctx)?;
            task = task.with_setup(shell_action(name, &setup));
        }
        if let Some(teardown) = &cfg.teardown {
            let teardown = substitute_tool_paths(name, teardown, ctx)?;
            task = task.with_teardown(shell_action(name, &teardown));
        }
        if let Some(finalizer) = &cfg.finalizer {
            let finalizer = substitute_tool_paths(name, finalizer, ctx)?;
            task = task.with_finalizer(shell_action(name, &finalizer));
        }
        if let Some(only_if_file) = &cfg.only_if_file {
            let gate = ctx.working_dir().join(only_if_file);
            task = task.with_criteria(Box::new(move |ctx: &ExecutionContext| {
                ctx.fs().is_file(&gate)
            }));
        }

        tasks.push(task);
    }

    Ok(tasks)
}

/// Replace `{tool:<name>}` placeholders with resolved tool paths.
fn substitute_tool_paths(task: &str, cmd: &str, ctx: &ExecutionContext) -> Result<String> {
    let mut result = cmd.to_string();
    for (tool, path) in ctx.tool_paths() {
        let placeholder = format!("{{tool:{tool}}}");
        result = result.replace(&placeholder, &path.display().to_string());
    }

    if result.contains("{tool:") {
        return Err(TaskforgeError::ConfigError(format!(
            "task '{}' uses a {{tool:...}} placeholder for a tool it does not declare via `tool`",
            task
        )));
    }

    Ok(result)
}

/// Figure out a sensible project root for tool resolution.
///
/// - If the manifest path has a non-empty parent (e.g. "ci/Taskforge.toml"),
///   we use that directory.
/// - If it's just a bare filename like "Taskforge.toml" (parent = ""),
///   we fall back to the current working directory "."
fn manifest_root_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
