//! `atoll islands` - list the islands in a chart

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use atoll_core::chart;
use atoll_core::error::Result;

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct IslandRow {
    name: String,
    population: u64,
    resources: BTreeMap<String, u64>,
}

pub fn run(cli: &Cli, chart_path: &Path) -> Result<()> {
    let sea = chart::load_sea(chart_path)?;

    let rows: Vec<IslandRow> = sea
        .ids()
        .map(|id| {
            let island = sea.island(id);
            IslandRow {
                name: island.name().to_string(),
                population: island.population(),
                resources: island
                    .resources()
                    .iter()
                    .map(|(k, v)| (k.clone(), *v))
                    .collect(),
            }
        })
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Human => {
            for row in &rows {
                println!("{} (population {})", row.name, row.population);
                for (kind, quantity) in &row.resources {
                    println!("  {}: {}", kind, quantity);
                }
            }
        }
    }

    Ok(())
}
