// src/config/validate.rs

use crate::config::model::{Manifest, RawManifest};
use crate::errors::{Result, TaskforgeError};

impl TryFrom<RawManifest> for Manifest {
    type Error = TaskforgeError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        validate_raw_manifest(&raw)?;
        Ok(Manifest::new_unchecked(raw.tool, raw.task))
    }
}

fn validate_raw_manifest(raw: &RawManifest) -> Result<()> {
    ensure_has_tasks(raw)?;
    validate_commands(raw)?;
    validate_tool_references(raw)?;
    Ok(())
}

fn ensure_has_tasks(raw: &RawManifest) -> Result<()> {
    if raw.task.is_empty() {
        return Err(TaskforgeError::ConfigError(
            "manifest must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_commands(raw: &RawManifest) -> Result<()> {
    for (name, task) in raw.task.iter() {
        if task.cmd.trim().is_empty() {
            return Err(TaskforgeError::ConfigError(format!(
                "task '{}' has an empty `cmd`",
                name
            )));
        }
    }
    for (name, tool) in raw.tool.iter() {
        if tool.executable.trim().is_empty() {
            return Err(TaskforgeError::ConfigError(format!(
                "tool '{}' has an empty `executable`",
                name
            )));
        }
    }
    Ok(())
}

fn validate_tool_references(raw: &RawManifest) -> Result<()> {
    for (name, task) in raw.task.iter() {
        if let Some(tool) = &task.tool {
            if !raw.tool.contains_key(tool) {
                return Err(TaskforgeError::ConfigError(format!(
                    "task '{}' references unknown tool '{}' (no [tool.{}] section)",
                    name, tool, tool
                )));
            }
        }
    }
    Ok(())
}
