// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskforge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskforge",
    version,
    about = "Run build tasks from a TOML manifest, with dry-run previews and external tool resolution.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the manifest file (TOML).
    ///
    /// Default: `Taskforge.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskforge.toml")]
    pub config: String,

    /// Enumerate the tasks that would run, without executing anything.
    ///
    /// Setup, teardown and error hooks are suppressed too; each task is
    /// printed as `"<ordinal>. <name>"` on stdout.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKFORGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
