//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor ordering of a free sequence, O(n²)
//! - [`nearest_neighbor_route`] — The same between two fixed depots, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_route, nearest_neighbor_tour, nearest_point};
