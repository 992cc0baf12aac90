//! # Mesh Topology
//!
//! Edge keys and face adjacency derived from a triangle index list.
//! Nothing here is cached between calls: each query rebuilds from the
//! buffers it is given.

pub mod adjacency;
pub mod edge;

pub use adjacency::AdjacencyGraph;
pub use edge::EdgeKey;
