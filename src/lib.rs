//! # u-delivery
//!
//! Delivery routing heuristics over deadline-tagged points: greedy
//! nearest-neighbor construction and 2-opt improvement, under Euclidean or
//! Manhattan distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSequence, Route, Tour trait)
//! - [`distance`] — Distance metrics and dense distance matrix
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — 2-opt improvement
//! - [`planner`] — Construction followed by optional improvement
//! - [`config`] — Planner configuration
//!
//! ## Example
//!
//! ```
//! use u_delivery::distance::Metric;
//! use u_delivery::models::{Point, Route, Tour};
//!
//! let mut route = Route::with_deadline(0);
//! route.add_unique(Point::new(0.0, 5.0, 10));
//! route.add_unique(Point::new(5.0, 0.0, 10));
//! route.add_unique(Point::new(5.0, 5.0, 10));
//! route.add_unique(Point::new(5.0, 5.0, 4));
//!
//! let improved = route
//!     .greedy_route(Metric::Euclidean)
//!     .opt2_rearrange(Metric::Euclidean);
//! assert_eq!(improved.num_stops(), 3);
//! assert!((improved.length(Metric::Euclidean) - 20.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::{ConfigError, SequenceError};
