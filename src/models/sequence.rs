//! Ordered point sequence.

use serde::{Deserialize, Serialize};

use super::{Point, Tour};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::Metric;
use crate::error::SequenceError;
use crate::local_search::two_opt_tour;

/// An ordered, owned sequence of points.
///
/// Insertion order is visiting order. Duplicates are allowed. Cloning a
/// sequence clones every point.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Metric;
/// use u_delivery::models::{Point, PointSequence, Tour};
///
/// let mut seq = PointSequence::new();
/// seq.append(Point::new(0.0, 0.0, 1));
/// seq.bulk_append([Point::new(3.0, 4.0, 2), Point::new(3.0, 0.0, 3)]);
///
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.last().unwrap(), &Point::new(3.0, 0.0, 0));
/// assert_eq!(seq.length(Metric::Euclidean), 9.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends a point at the end.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends points in the given order.
    pub fn bulk_append<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        self.points.extend(points);
    }

    /// Returns the point at `index`.
    pub fn at(&self, index: usize) -> Result<&Point, SequenceError> {
        self.points.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    /// Returns the point at `index` for deadline updates.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Point, SequenceError> {
        let len = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// Returns the final point.
    pub fn last(&self) -> Result<&Point, SequenceError> {
        self.points.last().ok_or(SequenceError::EmptyCollection)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub(crate) fn insert(&mut self, index: usize, point: Point) {
        self.points.insert(index, point);
    }

    pub(crate) fn position(&self, point: &Point) -> Option<usize> {
        self.points.iter().position(|p| p == point)
    }
}

impl Tour for PointSequence {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn greedy_route(&self, metric: Metric) -> Self {
        nearest_neighbor_tour(self, metric)
    }

    fn opt2_rearrange(&self, metric: Metric) -> Self {
        two_opt_tour(self, metric)
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSequence {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.bulk_append(iter);
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Space-separated `(x,y)` tokens in visiting order. Diagnostic only.
impl std::fmt::Display for PointSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
