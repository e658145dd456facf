// src/runner/command.rs

//! Shell-command actions for manifest tasks.
//!
//! Commands run synchronously through the platform shell; stdout is logged
//! at info and stderr at debug, and a non-zero exit code fails the task.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::errors::{Result, TaskforgeError};
use crate::runner::task::{ExecutionContext, TaskAction};

/// Build a [`TaskAction`] that runs `cmd` through the platform shell.
pub fn shell_action(task_name: &str, cmd: &str) -> TaskAction {
    let task_name = task_name.to_string();
    let cmd = cmd.to_string();
    Box::new(move |ctx| run_shell(&task_name, &cmd, ctx))
}

fn run_shell(task: &str, cmd: &str, ctx: &ExecutionContext) -> Result<()> {
    info!(task = %task, cmd = %cmd, "starting task process");

    // Build a shell command appropriate for the platform.
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    };

    let output = command
        .current_dir(ctx.working_dir())
        .stdin(Stdio::null())
        .output()
        .map_err(TaskforgeError::from)?;

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        info!(task = %task, "stdout: {}", line);
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        debug!(task = %task, "stderr: {}", line);
    }

    let code = output.status.code().unwrap_or(-1);
    info!(
        task = %task,
        exit_code = code,
        success = output.status.success(),
        "task process exited"
    );

    if output.status.success() {
        Ok(())
    } else {
        Err(TaskforgeError::TaskFailed {
            task: task.to_string(),
            reason: format!("exit code {code}"),
        })
    }
}
