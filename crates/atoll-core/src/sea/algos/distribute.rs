//! Resource distribution along shortest routes
//!
//! Runs Dijkstra from a source island over the whole network, then allocates
//! the source's stock of one resource kind to every reachable island, bounded
//! by the bottleneck capacity (minimum route travel time) of each island's
//! recorded shortest route.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::{AtollError, Result};
use crate::sea::{IslandId, Sea};

/// One allocation made by [`distribute_resource`]
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub island: String,
    pub resource: String,
    pub amount: f64,
}

/// Queue entry: accumulated travel time, plus the final hop's travel time as
/// a tie-break (higher capacity pops first on equal travel time)
#[derive(Debug, Clone)]
pub(crate) struct QueueEntry {
    pub island: IslandId,
    pub travel_time: f64,
    pub capacity: f64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.island == other.island
            && self.travel_time == other.travel_time
            && self.capacity == other.capacity
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Travel times are validated finite at add_route, so never NaN
        self.travel_time
            .partial_cmp(&other.travel_time)
            .unwrap()
            .then_with(|| other.capacity.partial_cmp(&self.capacity).unwrap())
    }
}

/// Distribute the source island's stock of `resource` to every reachable
/// island along shortest routes.
///
/// Each destination receives `min(remaining pool, path capacity)`, where the
/// path capacity is the minimum route travel time along its recorded shortest
/// route. Destinations are visited in island-id order, which is insertion
/// order, not distance order. The destination's stored quantity is credited
/// with the integer-truncated amount; the pool is drawn down by the exact
/// amount. The source is only ever drawn down, never credited.
///
/// Fails fast when the source name is unknown or the source holds none of the
/// named resource kind.
#[tracing::instrument(skip(sea), fields(source = %source, resource = %resource))]
pub fn distribute_resource(
    sea: &mut Sea,
    source: &str,
    resource: &str,
) -> Result<Vec<Allocation>> {
    let source_id = sea
        .island_id(source)
        .ok_or_else(|| AtollError::UnknownIsland {
            name: source.to_string(),
        })?;
    let stock = sea.island(source_id).resource(resource).ok_or_else(|| {
        AtollError::MissingResource {
            island: source.to_string(),
            resource: resource.to_string(),
        }
    })?;

    let (travel_times, previous) = relax_from(sea, source_id);

    let mut pool = stock as f64;
    let mut drawn: u64 = 0;
    let mut allocations = Vec::new();

    for index in 0..sea.len() {
        let target = IslandId(index);
        if target == source_id || travel_times[index].is_infinite() {
            continue;
        }

        let capacity = path_capacity(sea, &previous, source_id, target);
        let amount = pool.min(capacity);
        if amount > 0.0 {
            pool -= amount;
            let units = amount as u64;
            drawn += units;
            sea.island_mut(target).add_resource(resource, units);
            tracing::info!(
                island = %sea.island(target).name(),
                resource,
                amount,
                "allocated"
            );
            allocations.push(Allocation {
                island: sea.island(target).name().to_string(),
                resource: resource.to_string(),
                amount,
            });
        }
    }

    sea.island_mut(source_id).debit_resource(resource, drawn);
    Ok(allocations)
}

/// Dijkstra over the whole network from `source`, returning final travel
/// times and the predecessor of every reached island
fn relax_from(sea: &Sea, source: IslandId) -> (Vec<f64>, Vec<Option<IslandId>>) {
    let mut travel_times = vec![f64::INFINITY; sea.len()];
    let mut previous: Vec<Option<IslandId>> = vec![None; sea.len()];
    let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();

    travel_times[source.index()] = 0.0;
    heap.push(Reverse(QueueEntry {
        island: source,
        travel_time: 0.0,
        capacity: 0.0,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        // Skip entries made stale by a shorter route found after insertion
        if travel_times[entry.island.index()] < entry.travel_time {
            continue;
        }

        for route in sea.routes_from(entry.island) {
            let candidate = entry.travel_time + route.travel_time;
            if candidate < travel_times[route.to.index()] {
                travel_times[route.to.index()] = candidate;
                previous[route.to.index()] = Some(entry.island);
                heap.push(Reverse(QueueEntry {
                    island: route.to,
                    travel_time: candidate,
                    capacity: route.travel_time,
                }));
            }
        }
    }

    (travel_times, previous)
}

/// Minimum route travel time along the recorded shortest route from `source`
/// to `target`.
///
/// A broken predecessor link ends the walk early without updating the running
/// minimum; a walk that never crosses a route resolves to 0.
fn path_capacity(
    sea: &Sea,
    previous: &[Option<IslandId>],
    source: IslandId,
    target: IslandId,
) -> f64 {
    let mut capacity = f64::INFINITY;

    let mut current = target;
    while current != source {
        let Some(pred) = previous[current.index()] else {
            break;
        };
        if let Some(travel_time) = sea.route_time(pred, current) {
            capacity = capacity.min(travel_time);
        }
        current = pred;
    }

    if capacity.is_infinite() {
        0.0
    } else {
        capacity
    }
}
