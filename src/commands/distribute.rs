//! `atoll distribute` - allocate a resource along shortest routes

use std::path::Path;

use atoll_core::chart;
use atoll_core::error::Result;
use atoll_core::sea::distribute_resource;

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, chart_path: &Path, source: &str, resource: &str) -> Result<()> {
    let mut sea = chart::load_sea(chart_path)?;
    let allocations = distribute_resource(&mut sea, source, resource)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&allocations)?),
        OutputFormat::Human => {
            for allocation in &allocations {
                println!(
                    "allocated {} {} to {}",
                    allocation.amount, allocation.resource, allocation.island
                );
            }
            if !cli.quiet {
                let total: f64 = allocations.iter().map(|a| a.amount).sum();
                println!(
                    "{} islands supplied, {} {} allocated",
                    allocations.len(),
                    total,
                    resource
                );
            }
        }
    }

    Ok(())
}
