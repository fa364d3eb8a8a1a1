//! Chart files: declarative island-network descriptions
//!
//! A chart lists islands (with population and starting resources) and the
//! directed routes between them, as JSON or YAML. Charts replace hand-wired
//! demo construction so the CLI and tests build seas deterministically.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AtollError, Result};
use crate::sea::Sea;

/// A complete island-network description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub islands: Vec<IslandEntry>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One island entry in a chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IslandEntry {
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub resources: HashMap<String, u64>,
}

/// One directed route entry in a chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub travel_time: f64,
}

impl Chart {
    /// Load a chart from disk, picking the parser by file extension
    pub fn load(path: &Path) -> Result<Chart> {
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&raw)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&raw)?),
            other => Err(AtollError::InvalidChart {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported extension {:?} (expected: json, yaml, yml)",
                    other.unwrap_or("")
                ),
            }),
        }
    }

    /// Build a [`Sea`] from this chart.
    ///
    /// Unlike the in-memory `add_route` no-op contract, a chart route naming
    /// an unknown island is rejected: a chart is authored data and a typo'd
    /// endpoint is an error, not a request to skip.
    pub fn build(&self) -> Result<Sea> {
        let mut sea = Sea::new();

        for island in &self.islands {
            if sea.island_id(&island.name).is_some() {
                return Err(AtollError::DuplicateIsland {
                    name: island.name.clone(),
                });
            }
            let id = sea.add_island(&island.name, island.population);
            for (kind, quantity) in &island.resources {
                sea.island_mut(id).add_resource(kind, *quantity);
            }
        }

        for route in &self.routes {
            for endpoint in [&route.from, &route.to] {
                if sea.island_id(endpoint).is_none() {
                    return Err(AtollError::UnknownIsland {
                        name: endpoint.clone(),
                    });
                }
            }
            sea.add_route(&route.from, &route.to, route.travel_time)?;
        }

        Ok(sea)
    }
}

/// Load a chart file and build its sea in one step
pub fn load_sea(path: &Path) -> Result<Sea> {
    Chart::load(path)?.build()
}
