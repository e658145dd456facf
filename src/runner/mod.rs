// src/runner/mod.rs

//! Task execution layer.
//!
//! This module decides *how* a scheduled task is carried out:
//!
//! - [`task`] defines the task data model and the shared execution context.
//! - [`strategy`] defines the `ExecutionStrategy` contract every variant
//!   implements; the set is closed on purpose: callers depend only on the
//!   seven operations.
//! - [`live`] executes actions for real, brackets them with setup/teardown
//!   and routes errors through the task's hooks.
//! - [`dry_run`] enumerates tasks as numbered preview lines without running
//!   anything.
//! - [`command`] builds shell-command actions for tasks loaded from the
//!   manifest.
//! - [`engine`] is the sequential loop presenting tasks to a strategy, one
//!   at a time, in the order decided by the (external) task graph.

pub mod command;
pub mod dry_run;
pub mod engine;
pub mod live;
pub mod strategy;
pub mod task;

pub use command::shell_action;
pub use dry_run::DryRunStrategy;
pub use engine::TaskRunner;
pub use live::LiveStrategy;
pub use strategy::ExecutionStrategy;
pub use task::{Criteria, ErrorAction, ExecutionContext, Task, TaskAction, TaskName};
