// src/fs/glob.rs

//! Recursive glob search over an abstract [`FileSystem`].
//!
//! Patterns are relative to the given root (e.g. `tools/**/nuget.exe`).
//! Matches are yielded in whatever order directory enumeration produces;
//! no additional sorting is applied, so "first match" means first in
//! enumeration order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::Glob;

use super::FileSystem;

/// Collect all files under `root` that match `pattern`.
pub fn glob_files(fs: &dyn FileSystem, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .with_context(|| format!("invalid glob pattern: {pattern}"))?
        .compile_matcher();

    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        if !fs.is_dir(&dir) {
            continue;
        }
        for path in fs.read_dir(&dir)? {
            if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                // Paths enumerated under a `.` root come back without the
                // `./` prefix, so fall back to the path itself.
                let rel = path.strip_prefix(root).unwrap_or(&path);
                let rel_str = rel.to_string_lossy().replace('\\', "/");
                if matcher.is_match(&rel_str) {
                    files.push(path);
                }
            }
        }
    }

    Ok(files)
}
