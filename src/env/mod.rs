// src/env/mod.rs

//! Process-environment capability consumed by the tool resolver.
//!
//! Mirrors the [`crate::fs::FileSystem`] abstraction: production code reads
//! `std::env`, tests substitute [`mock::MockEnvironment`] and observe which
//! variables were consulted.

use std::fmt::Debug;

pub mod mock;

/// Platform default separator for PATH-style variables.
#[cfg(windows)]
pub const DEFAULT_PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const DEFAULT_PATH_SEPARATOR: char = ':';

/// Abstract environment-variable interface.
pub trait Environment: Send + Sync + Debug {
    /// Read a variable by name. `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Implementation that uses `std::env`.
#[derive(Debug, Clone, Default)]
pub struct RealEnvironment;

impl Environment for RealEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
