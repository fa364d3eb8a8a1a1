//! Shortest-route discovery between two islands
//!
//! Dijkstra's algorithm keyed by accumulated travel time, with path
//! reconstruction from a predecessor map.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::sea::{IslandId, Sea};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated travel time)
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry {
    pub island: IslandId,
    pub travel_time: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.island == other.island && self.travel_time == other.travel_time
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Travel times are validated finite at add_route, so never NaN
        self.travel_time.partial_cmp(&other.travel_time).unwrap()
    }
}

/// Find the shortest route from `start` to `end` by accumulated travel time.
///
/// Returns the islands along the route, endpoints included, or an empty
/// vector when either name is unknown or `end` is unreachable. When
/// `start == end` the route is the single island itself.
#[tracing::instrument(skip(sea), fields(start = %start, end = %end))]
pub fn shortest_path(sea: &Sea, start: &str, end: &str) -> Vec<IslandId> {
    let (Some(start_id), Some(end_id)) = (sea.island_id(start), sea.island_id(end)) else {
        return Vec::new();
    };

    let mut travel_times = vec![f64::INFINITY; sea.len()];
    let mut previous: Vec<Option<IslandId>> = vec![None; sea.len()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    travel_times[start_id.index()] = 0.0;
    heap.push(Reverse(HeapEntry {
        island: start_id,
        travel_time: 0.0,
    }));

    while let Some(Reverse(HeapEntry { island: current, .. })) = heap.pop() {
        if current == end_id {
            return reconstruct(&previous, start_id, end_id);
        }

        // A stale pop relaxes nothing: every neighbor already holds a
        // travel time at least as short, so the strict comparison fails.
        for route in sea.routes_from(current) {
            let candidate = travel_times[current.index()] + route.travel_time;
            if candidate < travel_times[route.to.index()] {
                travel_times[route.to.index()] = candidate;
                previous[route.to.index()] = Some(current);
                heap.push(Reverse(HeapEntry {
                    island: route.to,
                    travel_time: candidate,
                }));
            }
        }
    }

    Vec::new()
}

/// Walk the predecessor map backward from `end`, then reverse
fn reconstruct(previous: &[Option<IslandId>], start: IslandId, end: IslandId) -> Vec<IslandId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous[current.index()] {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// A resolved route with island names and the accumulated travel time
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub islands: Vec<String>,
    pub total_time: f64,
}

/// Run [`shortest_path`] and resolve the result to names and a total time
pub fn shortest_path_result(sea: &Sea, start: &str, end: &str) -> PathResult {
    let path = shortest_path(sea, start, end);

    let mut total_time = 0.0;
    for pair in path.windows(2) {
        if let Some(travel_time) = sea.route_time(pair[0], pair[1]) {
            total_time += travel_time;
        }
    }

    PathResult {
        from: start.to_string(),
        to: end.to_string(),
        found: !path.is_empty(),
        islands: path
            .iter()
            .map(|&id| sea.island(id).name().to_string())
            .collect(),
        total_time,
    }
}

#[cfg(test)]
mod tests;
