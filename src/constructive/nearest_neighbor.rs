//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from an anchor, always move to the
//! nearest unvisited point. Ties go to the lowest original index.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline
//! for [`two_opt_tour`](crate::local_search::two_opt_tour) to refine.

use tracing::debug;

use crate::distance::{DistanceMatrix, Metric};
use crate::models::{Point, PointSequence, Route, Tour};

/// Orders the points of `sequence` by repeated nearest-neighbor steps.
///
/// The tour starts at the first point and never restarts. Sequences of two
/// or fewer points are returned unchanged. `sequence` itself is untouched.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::nearest_neighbor_tour;
/// use u_delivery::distance::Metric;
/// use u_delivery::models::{Point, PointSequence, Tour};
///
/// let seq: PointSequence = vec![
///     Point::new(0.0, 0.0, 0),
///     Point::new(3.0, 0.0, 0),
///     Point::new(1.0, 0.0, 0),
///     Point::new(2.0, 0.0, 0),
/// ]
/// .into();
///
/// let tour = nearest_neighbor_tour(&seq, Metric::Euclidean);
/// let xs: Vec<f64> = tour.points().iter().map(|p| p.x()).collect();
/// assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn nearest_neighbor_tour(sequence: &PointSequence, metric: Metric) -> PointSequence {
    let points = sequence.points();
    let n = points.len();
    if n <= 2 {
        return sequence.clone();
    }

    debug!(points = n, %metric, "building nearest-neighbor tour");
    let distances = DistanceMatrix::from_points(points, metric);

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut tour = PointSequence::new();
    tour.append(points[0]);

    let mut current = 0;
    while let Some(next) = distances.nearest_unvisited(current, &visited) {
        visited[next] = true;
        tour.append(points[next]);
        current = next;
    }

    tour
}

/// Orders the stops of `route` by repeated nearest-neighbor steps.
///
/// Both depots stay in their slots and are never candidates. Each step
/// extends from the route's current [`last_non_depot`](Route::last_non_depot),
/// so the first stop chosen is the one closest to the end depot.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::nearest_neighbor_route;
/// use u_delivery::distance::Metric;
/// use u_delivery::models::{Point, Route, Tour};
///
/// let route = Route::from_stops(
///     Point::origin(0),
///     Point::origin(0),
///     [Point::new(0.0, 5.0, 0), Point::new(5.0, 0.0, 0), Point::new(5.0, 5.0, 0)],
/// );
///
/// let greedy = nearest_neighbor_route(&route, Metric::Euclidean);
/// assert_eq!(greedy.stops()[1], Point::new(5.0, 5.0, 0));
/// assert!((greedy.length(Metric::Euclidean) - 20.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_route(route: &Route, metric: Metric) -> Route {
    let points = route.points();
    let n = points.len();
    if n <= 2 {
        return route.clone();
    }

    debug!(stops = route.num_stops(), %metric, "building nearest-neighbor route");
    let distances = DistanceMatrix::from_points(points, metric);

    let mut visited = vec![false; n];
    visited[0] = true;
    visited[n - 1] = true;
    let mut result = Route::new(*route.start_depot(), *route.end_depot());

    // An empty route's last_non_depot is its end depot.
    let mut current = n - 1;
    while let Some(next) = distances.nearest_unvisited(current, &visited) {
        visited[next] = true;
        result.add(points[next]);
        current = next;
    }

    result
}

/// Index of the point in `points` nearest to `query`; convenience for callers
/// holding a plain slice.
pub fn nearest_point(points: &[Point], query: &Point, metric: Metric) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = metric.distance(query, p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
