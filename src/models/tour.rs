//! Shared interface of ordered, measurable tours.

use super::Point;
use crate::constructive::nearest_point;
use crate::distance::Metric;

/// An ordered collection of points that can be measured and rearranged.
///
/// Implemented by [`PointSequence`](super::PointSequence) (free order) and
/// [`Route`](super::Route) (first and last points fixed as depots). The
/// rearranging methods never modify `self`; they return a new tour.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Metric;
/// use u_delivery::models::{Point, PointSequence, Tour};
///
/// let seq: PointSequence = vec![
///     Point::new(3.0, 4.0, 0),
///     Point::new(-3.0, -4.0, 0),
///     Point::new(0.0, 0.0, 0),
/// ]
/// .into();
/// assert_eq!(seq.length(Metric::Euclidean), 15.0);
/// assert_eq!(seq.length(Metric::Manhattan), 21.0);
/// ```
pub trait Tour: Clone {
    /// The points in visiting order.
    fn points(&self) -> &[Point];

    /// Number of points, depots included.
    fn len(&self) -> usize {
        self.points().len()
    }

    /// Returns `true` if the tour holds no points.
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Sum of distances between consecutive points; zero for fewer than two.
    fn length(&self, metric: Metric) -> f64 {
        self.points()
            .windows(2)
            .map(|w| metric.distance(&w[0], &w[1]))
            .sum()
    }

    /// Index of the point closest to `query`, lowest index on ties.
    ///
    /// Returns `None` on an empty tour.
    fn nearest_index(&self, query: &Point, metric: Metric) -> Option<usize> {
        nearest_point(self.points(), query, metric)
    }

    /// Builds a nearest-neighbor ordering of the same points.
    fn greedy_route(&self, metric: Metric) -> Self;

    /// Shortens the tour with first-improvement 2-opt.
    fn opt2_rearrange(&self, metric: Metric) -> Self;
}
