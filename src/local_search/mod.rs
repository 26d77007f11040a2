//! Local search operators for improving tours.
//!
//! - [`two_opt_tour`] — 2-opt segment reversal over a free sequence
//! - [`two_opt_route`] — 2-opt segment reversal between fixed depots

mod two_opt;

pub use two_opt::{two_opt_route, two_opt_tour};
