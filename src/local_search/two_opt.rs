//! First-improvement 2-opt.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j`, reversing `order[i..=j]` replaces the
//! edges `(i-1, i)` and `(j, j+1)` with `(i-1, j)` and `(i, j+1)`. Interior
//! edges are traversed backwards but keep their length, so the gain is:
//!
//! ```text
//! gain = d(r[i-1], r[i]) + d(r[j], r[j+1]) - d(r[i-1], r[j]) - d(r[i], r[j+1])
//! ```
//!
//! At an open end the missing edge drops out of both sides. A pair that
//! spans the whole tour is never considered.
//!
//! The first reversal with `gain > 0` is applied immediately and the scan
//! restarts from the first pair. Improvement stops once a full scan finds
//! no improving pair.
//!
//! # Complexity
//!
//! O(n²) per pass. Every accepted move strictly shortens the tour, so the
//! search terminates, but the number of passes has no useful bound.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, trace};

use crate::distance::{DistanceMatrix, Metric};
use crate::models::{PointSequence, Route, Tour};

/// Applies 2-opt to a free-order sequence, returning the improved copy.
///
/// Any point may move, including the first and last. Sequences of two or
/// fewer points are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Metric;
/// use u_delivery::local_search::two_opt_tour;
/// use u_delivery::models::{Point, PointSequence, Tour};
///
/// // 0 → 2 → 1 → 3 along a line doubles back
/// let seq: PointSequence = [0.0, 2.0, 1.0, 3.0]
///     .into_iter()
///     .map(|x| Point::new(x, 0.0, 0))
///     .collect();
///
/// let improved = two_opt_tour(&seq, Metric::Euclidean);
/// assert!((improved.length(Metric::Euclidean) - 3.0).abs() < 1e-10);
/// assert!((seq.length(Metric::Euclidean) - 5.0).abs() < 1e-10);
/// ```
pub fn two_opt_tour(sequence: &PointSequence, metric: Metric) -> PointSequence {
    let points = sequence.points();
    let n = points.len();
    if n <= 2 {
        return sequence.clone();
    }

    let distances = DistanceMatrix::from_points(points, metric);
    let mut order: Vec<usize> = (0..n).collect();
    improve(&mut order, &distances, 0, n - 1);

    order.into_iter().map(|i| points[i]).collect()
}

/// Applies 2-opt to the stops of a route, returning the improved copy.
///
/// Only positions `1..=len-2` take part, so neither depot is ever inside a
/// reversed segment or used as its boundary. Routes with at most one stop
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Metric;
/// use u_delivery::local_search::two_opt_route;
/// use u_delivery::models::{Point, Route, Tour};
///
/// let route = Route::from_stops(
///     Point::origin(0),
///     Point::origin(0),
///     [Point::new(0.0, 5.0, 0), Point::new(5.0, 0.0, 0), Point::new(5.0, 5.0, 0)],
/// );
///
/// let improved = two_opt_route(&route, Metric::Euclidean);
/// assert!((improved.length(Metric::Euclidean) - 20.0).abs() < 1e-10);
/// assert_eq!(improved.start_depot(), route.start_depot());
/// ```
pub fn two_opt_route(route: &Route, metric: Metric) -> Route {
    let points = route.points();
    let n = points.len();
    if n <= 3 {
        return route.clone();
    }

    let distances = DistanceMatrix::from_points(points, metric);
    let mut order: Vec<usize> = (0..n).collect();
    improve(&mut order, &distances, 1, n - 2);

    Route::from_ordered(order.into_iter().map(|i| points[i]).collect())
}

/// Runs first-improvement 2-opt over `order[lo..=hi]` until no pair improves.
///
/// Returns the number of accepted reversals.
fn improve(order: &mut [usize], distances: &DistanceMatrix, lo: usize, hi: usize) -> usize {
    let initial = order_length(order, distances);
    let mut moves = 0;

    'scan: loop {
        for i in lo..hi {
            for j in (i + 1)..=hi {
                let Some(gain) = reversal_gain(order, distances, i, j) else {
                    continue;
                };
                if gain > 0.0 {
                    order[i..=j].reverse();
                    moves += 1;
                    trace!(i, j, gain, "accepted 2-opt reversal");
                    continue 'scan;
                }
            }
        }
        break;
    }

    debug!(
        moves,
        initial,
        improved = order_length(order, distances),
        "2-opt converged"
    );
    moves
}

/// Length saved by reversing `order[i..=j]`, or `None` when the pair spans
/// the whole order.
fn reversal_gain(order: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> Option<f64> {
    let d = |a: usize, b: usize| distances.get(order[a], order[b]);
    let has_prev = i > 0;
    let has_next = j + 1 < order.len();

    let (old, new) = match (has_prev, has_next) {
        (false, false) => return None,
        (true, true) => (
            d(i - 1, i) + d(j, j + 1),
            d(i - 1, j) + d(i, j + 1),
        ),
        (false, true) => (d(j, j + 1), d(i, j + 1)),
        (true, false) => (d(i - 1, i), d(i - 1, j)),
    };
    Some(old - new)
}

fn order_length(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn line(xs: &[f64]) -> PointSequence {
        xs.iter().map(|&x| Point::new(x, 0.0, 0)).collect()
    }

    fn xs(points: &[Point]) -> Vec<f64> {
        points.iter().map(|p| p.x()).collect()
    }

    fn crossing_route() -> Route {
        Route::from_stops(
            Point::origin(0),
            Point::origin(0),
            [
                Point::new(0.0, 5.0, 0),
                Point::new(5.0, 0.0, 0),
                Point::new(5.0, 5.0, 0),
            ],
        )
    }

    #[test]
    fn test_2opt_already_optimal() {
        let seq = line(&[0.0, 1.0, 2.0, 3.0]);
        let improved = two_opt_tour(&seq, Metric::Euclidean);
        assert_eq!(xs(improved.points()), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_2opt_removes_backtrack() {
        let seq = line(&[0.0, 2.0, 1.0, 3.0]);
        let improved = two_opt_tour(&seq, Metric::Manhattan);
        assert_eq!(xs(improved.points()), vec![0.0, 1.0, 2.0, 3.0]);
        assert!((improved.length(Metric::Manhattan) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_open_ends_can_move() {
        // 0 → 5 → 1: reversing the head, then the tail, ends at 5 → 1 → 0
        let seq = line(&[0.0, 5.0, 1.0]);
        let improved = two_opt_tour(&seq, Metric::Euclidean);
        assert_eq!(xs(improved.points()), vec![5.0, 1.0, 0.0]);
        assert!((improved.length(Metric::Euclidean) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_short_sequences_copied() {
        let seq = line(&[4.0, 1.0]);
        assert_eq!(xs(two_opt_tour(&seq, Metric::Euclidean).points()), vec![4.0, 1.0]);
        assert!(two_opt_tour(&PointSequence::new(), Metric::Euclidean).is_empty());
    }

    #[test]
    fn test_2opt_does_not_mutate_input() {
        let seq = line(&[0.0, 2.0, 1.0, 3.0]);
        let _ = two_opt_tour(&seq, Metric::Euclidean);
        assert_eq!(xs(seq.points()), vec![0.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_whole_span_pair_skipped() {
        let order = [0, 1, 2];
        let dm = DistanceMatrix::from_points(line(&[0.0, 5.0, 1.0]).points(), Metric::Euclidean);
        assert_eq!(reversal_gain(&order, &dm, 0, 2), None);
        assert!(reversal_gain(&order, &dm, 0, 1).is_some());
    }

    #[test]
    fn test_reversal_gain_interior() {
        let order = [0, 1, 2, 3];
        let dm = DistanceMatrix::from_points(line(&[0.0, 2.0, 1.0, 3.0]).points(), Metric::Euclidean);
        // old: d(0,2) + d(1,3) = 4, new: d(0,1) + d(2,3) = 2
        let gain = reversal_gain(&order, &dm, 1, 2).expect("interior pair");
        assert!((gain - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_route_uncrosses() {
        let route = crossing_route();
        let before = route.length(Metric::Euclidean);
        let improved = two_opt_route(&route, Metric::Euclidean);
        assert!(before > 24.0);
        assert!((improved.length(Metric::Euclidean) - 20.0).abs() < 1e-10);
        assert_eq!(
            improved.stops(),
            &[
                Point::new(0.0, 5.0, 0),
                Point::new(5.0, 5.0, 0),
                Point::new(5.0, 0.0, 0),
            ]
        );
    }

    #[test]
    fn test_2opt_route_keeps_depots() {
        let start = Point::new(-10.0, 0.0, 1);
        let end = Point::new(10.0, 0.0, 2);
        let route = Route::from_stops(
            start,
            end,
            [
                Point::new(6.0, 0.0, 0),
                Point::new(-6.0, 0.0, 0),
                Point::new(2.0, 0.0, 0),
                Point::new(-2.0, 0.0, 0),
            ],
        );
        let improved = two_opt_route(&route, Metric::Manhattan);
        assert_eq!(improved.start_depot(), &start);
        assert_eq!(improved.end_depot(), &end);
        assert_eq!(improved.start_depot().deadline(), 1);
        assert_eq!(improved.end_depot().deadline(), 2);
        assert!((improved.length(Metric::Manhattan) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_route_single_stop_copied() {
        let route = Route::from_stops(Point::origin(0), Point::new(9.0, 9.0, 0), [Point::new(1.0, 1.0, 0)]);
        assert_eq!(two_opt_route(&route, Metric::Euclidean), route);
    }

    #[test]
    fn test_2opt_idempotent() {
        let route = crossing_route();
        let once = two_opt_route(&route, Metric::Euclidean);
        let twice = two_opt_route(&once, Metric::Euclidean);
        assert_eq!(once, twice);
        assert_eq!(
            once.length(Metric::Euclidean),
            twice.length(Metric::Euclidean)
        );
    }

    #[test]
    fn test_improve_counts_moves() {
        let seq = line(&[0.0, 2.0, 1.0, 3.0]);
        let dm = DistanceMatrix::from_points(seq.points(), Metric::Euclidean);
        let mut order = vec![0, 1, 2, 3];
        assert_eq!(improve(&mut order, &dm, 0, 3), 1);
        assert_eq!(order, vec![0, 2, 1, 3]);
        assert_eq!(improve(&mut order, &dm, 0, 3), 0);
    }
}
