//! Arena-backed storage for islands and the routes between them

use std::collections::HashMap;

use crate::error::{AtollError, Result};

/// Index of an island within a [`Sea`]
///
/// Ids are stable for the lifetime of the sea; islands are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandId(pub(crate) usize);

impl IslandId {
    /// Position of the island in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed route to another island with a travel time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub to: IslandId,
    pub travel_time: f64,
}

/// One island: identity, population, and resources on hand
#[derive(Debug, Clone)]
pub struct Island {
    name: String,
    population: u64,
    resources: HashMap<String, u64>,
}

impl Island {
    fn new(name: &str, population: u64) -> Self {
        Island {
            name: name.to_string(),
            population,
            resources: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Add to the on-hand quantity of a resource kind
    pub fn add_resource(&mut self, kind: &str, quantity: u64) {
        *self.resources.entry(kind.to_string()).or_insert(0) += quantity;
    }

    /// On-hand quantity of a resource kind, or `None` if the island
    /// has never held that kind
    pub fn resource(&self, kind: &str) -> Option<u64> {
        self.resources.get(kind).copied()
    }

    pub fn resources(&self) -> &HashMap<String, u64> {
        &self.resources
    }

    /// Draw down a resource, saturating at zero
    pub(crate) fn debit_resource(&mut self, kind: &str, quantity: u64) {
        if let Some(held) = self.resources.get_mut(kind) {
            *held = held.saturating_sub(quantity);
        }
    }
}

/// The island network: a name-addressed arena of islands plus per-island
/// outgoing routes
#[derive(Debug, Default)]
pub struct Sea {
    islands: Vec<Island>,
    routes: Vec<Vec<Route>>,
    ids: HashMap<String, IslandId>,
}

impl Sea {
    pub fn new() -> Self {
        Sea::default()
    }

    /// Add an island. Re-adding an existing name reuses its slot and resets
    /// population, outgoing routes, and resources; callers should avoid
    /// re-adding names.
    pub fn add_island(&mut self, name: &str, population: u64) -> IslandId {
        if let Some(&id) = self.ids.get(name) {
            self.islands[id.0] = Island::new(name, population);
            self.routes[id.0].clear();
            return id;
        }

        let id = IslandId(self.islands.len());
        self.islands.push(Island::new(name, population));
        self.routes.push(Vec::new());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Add a directed route between two named islands.
    ///
    /// Errors on a negative or non-finite travel time. If either endpoint
    /// name is unknown the call is a no-op. A route between the same ordered
    /// pair overwrites the previous travel time; the reverse route is never
    /// added implicitly.
    pub fn add_route(&mut self, from: &str, to: &str, travel_time: f64) -> Result<()> {
        if !travel_time.is_finite() || travel_time < 0.0 {
            return Err(AtollError::InvalidRoute {
                from: from.to_string(),
                to: to.to_string(),
                travel_time,
            });
        }

        let (Some(&from_id), Some(&to_id)) = (self.ids.get(from), self.ids.get(to)) else {
            tracing::debug!(from, to, "route endpoint unknown, skipping");
            return Ok(());
        };

        let routes = &mut self.routes[from_id.0];
        match routes.iter_mut().find(|r| r.to == to_id) {
            Some(route) => route.travel_time = travel_time,
            None => routes.push(Route { to: to_id, travel_time }),
        }
        Ok(())
    }

    /// Resolve an island name to its id
    pub fn island_id(&self, name: &str) -> Option<IslandId> {
        self.ids.get(name).copied()
    }

    /// Look up an island by name
    pub fn get(&self, name: &str) -> Option<&Island> {
        self.island_id(name).map(|id| self.island(id))
    }

    pub fn island(&self, id: IslandId) -> &Island {
        &self.islands[id.0]
    }

    pub fn island_mut(&mut self, id: IslandId) -> &mut Island {
        &mut self.islands[id.0]
    }

    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Island ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = IslandId> + '_ {
        (0..self.islands.len()).map(IslandId)
    }

    /// Outgoing routes of an island
    pub fn routes_from(&self, id: IslandId) -> &[Route] {
        &self.routes[id.0]
    }

    /// Travel time of one directed route, if it exists
    pub fn route_time(&self, from: IslandId, to: IslandId) -> Option<f64> {
        self.routes[from.0]
            .iter()
            .find(|r| r.to == to)
            .map(|r| r.travel_time)
    }
}

#[cfg(test)]
mod tests;
