//! Distance metrics and precomputed distance matrices.
//!
//! Provides the two supported metrics and a dense matrix used by the
//! construction and improvement heuristics.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::Metric;
