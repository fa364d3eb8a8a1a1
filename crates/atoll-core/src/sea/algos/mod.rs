//! Path algorithms over the island network

pub mod distribute;
pub mod shortest_path;

pub use distribute::{distribute_resource, Allocation};
pub use shortest_path::{shortest_path, shortest_path_result, PathResult};
