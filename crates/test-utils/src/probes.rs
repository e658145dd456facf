#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use taskforge::errors::TaskforgeError;
use taskforge::runner::{ErrorAction, TaskAction};

/// Counts how often an action is invoked, without doing any work.
///
/// The core no-op guarantee tests hang off this: hand a task a spy action,
/// push it through a strategy, and assert the count stayed at zero.
#[derive(Debug, Clone, Default)]
pub struct SpyAction {
    count: Arc<AtomicUsize>,
}

impl SpyAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// An action that records the call and succeeds.
    pub fn action(&self) -> TaskAction {
        let count = Arc::clone(&self.count);
        Box::new(move |_ctx| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    /// An action that records the call and fails.
    pub fn failing_action(&self, task: &str) -> TaskAction {
        let count = Arc::clone(&self.count);
        let task = task.to_string();
        Box::new(move |_ctx| {
            count.fetch_add(1, Ordering::SeqCst);
            Err(TaskforgeError::TaskFailed {
                task: task.clone(),
                reason: "spy failure".to_string(),
            })
        })
    }

    /// An error hook that records the call and reports the error handled.
    pub fn error_action(&self) -> ErrorAction {
        let count = Arc::clone(&self.count);
        Box::new(move |_err| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    /// An error hook that records the call and re-raises.
    pub fn rethrowing_error_action(&self, task: &str) -> ErrorAction {
        let count = Arc::clone(&self.count);
        let task = task.to_string();
        Box::new(move |_err| {
            count.fetch_add(1, Ordering::SeqCst);
            Err(TaskforgeError::TaskFailed {
                task: task.clone(),
                reason: "rethrown by handler".to_string(),
            })
        })
    }
}

/// Records labelled events in call order, for bracket-ordering assertions.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// An action that logs `label` and succeeds.
    pub fn action(&self, label: &str) -> TaskAction {
        let events = Arc::clone(&self.events);
        let label = label.to_string();
        Box::new(move |_ctx| {
            events.lock().unwrap().push(label.clone());
            Ok(())
        })
    }

    /// An action that logs `label` and fails.
    pub fn failing_action(&self, label: &str, task: &str) -> TaskAction {
        let events = Arc::clone(&self.events);
        let label = label.to_string();
        let task = task.to_string();
        Box::new(move |_ctx| {
            events.lock().unwrap().push(label.clone());
            Err(TaskforgeError::TaskFailed {
                task: task.clone(),
                reason: "logged failure".to_string(),
            })
        })
    }
}
