//! CLI argument parsing for atoll
//!
//! Uses clap derive with global flags: --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for atoll commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Atoll - shortest routes and resource distribution over island networks
#[derive(Parser, Debug)]
#[command(name = "atoll")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ATOLL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two islands
    Path {
        /// Chart file (json or yaml)
        chart: PathBuf,

        /// Starting island name
        from: String,

        /// Destination island name
        to: String,
    },

    /// Distribute a resource from one island along shortest routes
    Distribute {
        /// Chart file (json or yaml)
        chart: PathBuf,

        /// Source island name
        source: String,

        /// Resource kind to distribute
        resource: String,
    },

    /// List the islands in a chart
    Islands {
        /// Chart file (json or yaml)
        chart: PathBuf,
    },
}
