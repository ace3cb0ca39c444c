// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::Status;

/// Command-line arguments for `activitymap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "activitymap",
    version,
    about = "Track progress through a map of dependent learning activities.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the activity map (TOML).
    #[arg(long, value_name = "PATH", default_value = "ActivityMap.toml", global = true)]
    pub map: String,

    /// Directory holding the completed-activities store.
    ///
    /// Overrides `[storage].dir` from the map file.
    #[arg(long, value_name = "PATH", global = true)]
    pub state_dir: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ACTIVITYMAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the status of every activity.
    Status {
        /// Print a JSON snapshot instead of a list.
        #[arg(long)]
        json: bool,

        /// Only show activities with this status.
        #[arg(long, value_name = "STATUS")]
        only: Option<Status>,
    },

    /// Flip an activity between completed and not completed.
    Toggle { label: String },

    /// Mark an activity as completed.
    Complete { label: String },

    /// Mark an activity as not completed.
    Uncomplete { label: String },

    /// Print the bounding box of all activity positions.
    Dimensions {
        /// Fit the box to the nodes instead of always including the origin.
        #[arg(long)]
        tight: bool,

        #[arg(long)]
        json: bool,
    },

    /// Report dangling connections, duplicate labels and cycles.
    Check {
        #[arg(long)]
        json: bool,
    },

    /// Print the stored completed-activities string.
    Export,
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
