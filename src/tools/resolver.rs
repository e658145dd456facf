// src/tools/resolver.rs

//! Layered tool resolver with an explicit per-instance cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::env::{DEFAULT_PATH_SEPARATOR, Environment};
use crate::errors::{Result, TaskforgeError};
use crate::fs::{FileSystem, glob_files};
use crate::tools::{ToolResolver, ToolSpec};

/// Resolves a tool executable through the layered fallback chain.
///
/// One instance per tool kind, created once and reused for a whole build
/// run. The cache is plain internal state behind `&mut self`; callers that
/// share a resolver across sessions get re-validation for free because the
/// cached path's existence is re-checked on every call.
#[derive(Debug)]
pub struct LayeredToolResolver {
    spec: ToolSpec,
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn Environment>,
    root: PathBuf,
    path_variable: String,
    path_separator: char,
    cached: Option<PathBuf>,
}

impl LayeredToolResolver {
    pub fn new(spec: ToolSpec, fs: Arc<dyn FileSystem>, env: Arc<dyn Environment>) -> Self {
        Self {
            spec,
            fs,
            env,
            root: PathBuf::from("."),
            path_variable: "PATH".to_string(),
            path_separator: DEFAULT_PATH_SEPARATOR,
            cached: None,
        }
    }

    /// Root directory the `tools/**` glob layer searches under.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Name of the PATH-style variable consulted by the last-resort layer.
    pub fn with_path_variable(mut self, name: impl Into<String>) -> Self {
        self.path_variable = name.into();
        self
    }

    /// Separator used to split the PATH-style variable.
    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    /// Layer 2: explicit override via the tool's environment variable.
    fn resolve_from_override(&self) -> Option<PathBuf> {
        let value = self.env.var(&self.spec.env_override)?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let candidate = PathBuf::from(value);
        if self.fs.is_file(&candidate) {
            debug!(
                tool = %self.spec.name,
                var = %self.spec.env_override,
                path = %candidate.display(),
                "resolved tool from environment override"
            );
            Some(candidate)
        } else {
            debug!(
                tool = %self.spec.name,
                var = %self.spec.env_override,
                path = %candidate.display(),
                "environment override set but file does not exist"
            );
            None
        }
    }

    /// Layer 3: conventional project-local tool directory.
    ///
    /// Takes the first glob match in enumeration order; no extra sorting.
    fn resolve_from_tools_dir(&self) -> Option<PathBuf> {
        let pattern = format!("tools/**/{}", self.spec.executable);
        let matches = glob_files(self.fs.as_ref(), &self.root, &pattern).ok()?;
        let candidate = matches.into_iter().find(|p| self.fs.is_file(p))?;
        debug!(
            tool = %self.spec.name,
            path = %candidate.display(),
            "resolved tool from local tools directory"
        );
        Some(candidate)
    }

    /// Layer 4: PATH-style search, first existing directory containing the
    /// executable wins.
    fn resolve_from_path(&self) -> Option<PathBuf> {
        let path_value = self.env.var(&self.path_variable)?;
        if path_value.trim().is_empty() {
            return None;
        }
        path_value
            .split(self.path_separator)
            .filter(|entry| !entry.trim().is_empty())
            .map(Path::new)
            .filter(|dir| self.fs.is_dir(dir))
            .map(|dir| dir.join(&self.spec.executable))
            .find(|candidate| self.fs.is_file(candidate))
            .inspect(|candidate| {
                debug!(
                    tool = %self.spec.name,
                    path = %candidate.display(),
                    "resolved tool from PATH search"
                );
            })
    }

    fn cache_and_return(&mut self, path: PathBuf) -> Result<PathBuf> {
        info!(tool = %self.spec.name, path = %path.display(), "tool resolved");
        self.cached = Some(path.clone());
        Ok(path)
    }
}

impl ToolResolver for LayeredToolResolver {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn resolve_tool_path(&mut self) -> Result<PathBuf> {
        // Layer 1: cached hit, re-validated every call. The file may have
        // been deleted since it was cached; a stale entry restarts the chain.
        if let Some(cached) = self.cached.clone() {
            if self.fs.is_file(&cached) {
                return Ok(cached);
            }
            debug!(
                tool = %self.spec.name,
                path = %cached.display(),
                "cached tool path no longer exists; re-resolving"
            );
            self.cached = None;
        }

        if let Some(path) = self.resolve_from_override() {
            return self.cache_and_return(path);
        }

        if let Some(path) = self.resolve_from_tools_dir() {
            return self.cache_and_return(path);
        }

        if let Some(path) = self.resolve_from_path() {
            return self.cache_and_return(path);
        }

        Err(TaskforgeError::ToolNotFound {
            tool: self.spec.name.clone(),
        })
    }
}
