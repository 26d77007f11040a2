//! Domain model types for delivery routing.
//!
//! Provides deadline-tagged points, free-order point sequences, routes with
//! fixed start and end depots, and the [`Tour`] trait that both sequence
//! kinds implement.

mod point;
mod route;
mod sequence;
mod tour;

pub use point::Point;
pub use route::Route;
pub use sequence::PointSequence;
pub use tour::Tour;
