//! Command implementations for the atoll CLI

pub mod distribute;
pub mod islands;
pub mod path;

use atoll_core::error::Result;

use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line to its implementation
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Path { chart, from, to } => path::run(cli, chart, from, to),
        Commands::Distribute {
            chart,
            source,
            resource,
        } => distribute::run(cli, chart, source, resource),
        Commands::Islands { chart } => islands::run(cli, chart),
    }
}
