//! Depot-anchored delivery route.

use serde::Serialize;

use super::{Point, PointSequence, Tour};
use crate::constructive::nearest_neighbor_route;
use crate::distance::Metric;
use crate::error::SequenceError;
use crate::local_search::two_opt_route;

/// A delivery run that starts at one depot and ends at another.
///
/// The first and last points are the depots. Stops are always inserted
/// between them, and no route operation moves or removes a depot, so a
/// route holds at least two points.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route, Tour};
///
/// let mut route = Route::with_deadline(100);
/// route.add(Point::new(1.0, 0.0, 10));
/// route.add(Point::new(2.0, 0.0, 20));
///
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.num_stops(), 2);
/// assert_eq!(route.last_non_depot(), &Point::new(2.0, 0.0, 0));
/// assert_eq!(route.end_depot(), &Point::origin(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    points: PointSequence,
}

impl Route {
    /// Creates a route between two depots with no stops.
    pub fn new(start_depot: Point, end_depot: Point) -> Self {
        Self {
            points: vec![start_depot, end_depot].into(),
        }
    }

    /// Creates a route whose depots both sit at the origin with `deadline`.
    pub fn with_deadline(deadline: i32) -> Self {
        Self::new(Point::origin(deadline), Point::origin(deadline))
    }

    /// Creates a route and adds `stops` between the depots in order.
    pub fn from_stops<I>(start_depot: Point, end_depot: Point, stops: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut route = Self::new(start_depot, end_depot);
        for stop in stops {
            route.add(stop);
        }
        route
    }

    /// Wraps an already ordered point list whose ends are the depots.
    pub(crate) fn from_ordered(points: Vec<Point>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Inserts `point` just before the end depot.
    pub fn add(&mut self, point: Point) {
        let len = self.points.len();
        if len < 2 {
            self.points.append(point);
        } else {
            self.points.insert(len - 1, point);
        }
    }

    /// Adds `point` unless a point with the same coordinates is present.
    ///
    /// When a match exists its deadline becomes the earlier of the two and
    /// nothing is inserted. Depots are matched like any other point.
    pub fn add_unique(&mut self, point: Point) {
        match self.points.position(&point) {
            Some(i) => {
                if let Ok(existing) = self.points.at_mut(i) {
                    if point.deadline() < existing.deadline() {
                        existing.set_deadline(point.deadline());
                    }
                }
            }
            None => self.add(point),
        }
    }

    /// The fixed first point.
    pub fn start_depot(&self) -> &Point {
        &self.points.points()[0]
    }

    /// The fixed last point.
    pub fn end_depot(&self) -> &Point {
        let points = self.points.points();
        &points[points.len() - 1]
    }

    /// The last stop before the end depot, or the end depot if there are no stops.
    pub fn last_non_depot(&self) -> &Point {
        let points = self.points.points();
        let n = points.len();
        if n <= 2 {
            self.end_depot()
        } else {
            &points[n - 2]
        }
    }

    /// The stops strictly between the depots.
    pub fn stops(&self) -> &[Point] {
        let points = self.points.points();
        &points[1..points.len() - 1]
    }

    /// Number of stops, depots excluded.
    pub fn num_stops(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Returns the point at `index`, depots included.
    pub fn at(&self, index: usize) -> Result<&Point, SequenceError> {
        self.points.at(index)
    }

    /// Returns the final point, which is the end depot.
    pub fn last(&self) -> Result<&Point, SequenceError> {
        self.points.last()
    }

    /// Earliest deadline among the stops, if there are any.
    pub fn earliest_deadline(&self) -> Option<i32> {
        self.stops().iter().map(Point::deadline).min()
    }

    /// The underlying point sequence, depots included.
    pub fn as_sequence(&self) -> &PointSequence {
        &self.points
    }
}

impl Tour for Route {
    fn points(&self) -> &[Point] {
        self.points.points()
    }

    fn greedy_route(&self, metric: Metric) -> Self {
        nearest_neighbor_route(self, metric)
    }

    fn opt2_rearrange(&self, metric: Metric) -> Self {
        two_opt_route(self, metric)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.points, f)
    }
}
