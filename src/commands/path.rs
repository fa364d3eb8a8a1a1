//! `atoll path` - shortest route between two islands

use std::path::Path;

use atoll_core::chart;
use atoll_core::error::{AtollError, Result};
use atoll_core::sea::shortest_path_result;

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, chart_path: &Path, from: &str, to: &str) -> Result<()> {
    let sea = chart::load_sea(chart_path)?;
    let result = shortest_path_result(&sea, from, to);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            if result.found {
                for name in &result.islands {
                    println!("{}", name);
                }
                if !cli.quiet {
                    println!(
                        "{} islands, total travel time {}",
                        result.islands.len(),
                        result.total_time
                    );
                }
            }
        }
    }

    if result.found {
        Ok(())
    } else {
        Err(AtollError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
