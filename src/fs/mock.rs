// src/fs/mock.rs

//! In-memory filesystem used by tests.
//!
//! Besides answering lookups, the mock records how many times each operation
//! was invoked, so tests can assert which resolution layers were actually
//! consulted.

use super::FileSystem;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File,
    Dir(Vec<String>), // List of child names
}

#[derive(Debug, Clone)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    ops: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip `.` components so that `./tools` and `tools` refer to the same
/// entry. An empty result maps back to `.` (the root).
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        // Ensure root exists
        entries.insert(PathBuf::from("."), MockEntry::Dir(Vec::new()));

        Self {
            entries: Arc::new(Mutex::new(entries)),
            ops: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        entries.insert(path.clone(), MockEntry::File);
        self.link_to_parent(&mut entries, &path);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        self.ensure_dir_entry(&mut entries, &path);
    }

    /// Remove a file, simulating deletion between resolution calls.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&path);
        if let Some(parent) = path.parent() {
            let parent = normalize(parent);
            if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    children.retain(|c| c != name);
                }
            }
        }
    }

    /// How many times a given operation (`"is_file"`, `"is_dir"`,
    /// `"read_dir"`) has been invoked.
    pub fn op_count(&self, op: &str) -> usize {
        let ops = self.ops.lock().unwrap();
        ops.get(op).copied().unwrap_or(0)
    }

    pub fn reset_op_counts(&self) {
        self.ops.lock().unwrap().clear();
    }

    fn record(&self, op: &'static str) {
        let mut ops = self.ops.lock().unwrap();
        *ops.entry(op).or_insert(0) += 1;
    }

    fn link_to_parent(&self, entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if let Some(parent) = path.parent() {
            let parent = normalize(parent);
            self.ensure_dir_entry(entries, &parent);
            if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if !children.contains(&name.to_string()) {
                        children.push(name.to_string());
                    }
                }
            }
        }
    }

    fn ensure_dir_entry(&self, entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        if entries.contains_key(path) {
            return;
        }
        entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
        if let Some(parent) = path.parent() {
            let parent = normalize(parent);
            if parent != path {
                // Avoid infinite recursion at the root
                self.ensure_dir_entry(entries, &parent);
                if let Some(MockEntry::Dir(children)) = entries.get_mut(&parent) {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        if !children.contains(&name.to_string()) {
                            children.push(name.to_string());
                        }
                    }
                }
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.record("is_file");
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(&normalize(path)), Some(MockEntry::File))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.record("is_dir");
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(&normalize(path)), Some(MockEntry::Dir(_)))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.record("read_dir");
        let entries = self.entries.lock().unwrap();
        let path = normalize(path);
        match entries.get(&path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}
