// src/tools/mod.rs

//! External-tool resolution.
//!
//! Tasks frequently shell out to executables that are not part of the
//! project itself (package managers, code generators, ...). This module
//! locates such executables on disk through an ordered fallback chain:
//!
//! 1. a previously cached hit (re-validated on every call),
//! 2. a tool-specific override environment variable,
//! 3. a recursive glob over the conventional `tools/` directory,
//! 4. a PATH-style search.
//!
//! - [`resolver`] owns the chain and its per-instance cache.

use std::path::PathBuf;

use crate::errors::Result;

pub mod resolver;

pub use resolver::LayeredToolResolver;

/// Identity and lookup parameters for one external tool.
///
/// `name` is used only for diagnostics; `executable` is the file name probed
/// on disk; `env_override` is the variable a user can set to point at an
/// exact binary (e.g. `NUGET_EXE`).
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub executable: String,
    pub env_override: String,
}

impl ToolSpec {
    pub fn new(
        name: impl Into<String>,
        executable: impl Into<String>,
        env_override: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            executable: executable.into(),
            env_override: env_override.into(),
        }
    }
}

/// Contract every tool resolver exposes to task actions and pre-flight
/// checks.
pub trait ToolResolver {
    /// Logical tool name, constant per resolver instance.
    fn name(&self) -> &str;

    /// Locate the tool executable, caching the first valid hit.
    ///
    /// Fails with [`crate::errors::TaskforgeError::ToolNotFound`] when every
    /// fallback layer is exhausted.
    fn resolve_tool_path(&mut self) -> Result<PathBuf>;
}
