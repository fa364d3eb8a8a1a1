//! The island network: islands, directed routes, and the algorithms over them

pub mod algos;
mod store;

pub use algos::{distribute_resource, shortest_path, shortest_path_result, Allocation, PathResult};
pub use store::{Island, IslandId, Route, Sea};
