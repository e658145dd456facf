// src/env/mock.rs

//! In-memory environment used by tests, with read recording.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::Environment;

#[derive(Debug, Clone, Default)]
pub struct MockEnvironment {
    vars: Arc<Mutex<HashMap<String, String>>>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.lock().unwrap().insert(name.into(), value.into());
    }

    pub fn unset(&self, name: &str) {
        self.vars.lock().unwrap().remove(name);
    }

    /// How many times the given variable has been read.
    pub fn read_count(&self, name: &str) -> usize {
        self.reads.lock().unwrap().iter().filter(|r| r.as_str() == name).count()
    }
}

impl Environment for MockEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.reads.lock().unwrap().push(name.to_string());
        self.vars.lock().unwrap().get(name).cloned()
    }
}
