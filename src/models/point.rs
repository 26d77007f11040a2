//! Delivery point type.

use serde::{Deserialize, Serialize};

use crate::distance::Metric;

/// A delivery location with a deadline.
///
/// Coordinates are fixed at construction; only the deadline can change.
/// Two points are equal when their coordinates are equal, regardless of
/// deadline.
///
/// Coordinates are expected to be finite. NaN or infinite values are not
/// rejected, and distances involving them are meaningless.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
///
/// let mut p = Point::new(3.0, 4.0, 10);
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(p.deadline(), 10);
///
/// p.set_deadline(7);
/// assert_eq!(p.deadline(), 7);
/// assert_eq!(p, Point::new(3.0, 4.0, 99));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    deadline: i32,
}

impl Point {
    /// Creates a point at `(x, y)` due by `deadline`.
    pub fn new(x: f64, y: f64, deadline: i32) -> Self {
        Self { x, y, deadline }
    }

    /// Creates a point at the origin due by `deadline`.
    pub fn origin(deadline: i32) -> Self {
        Self::new(0.0, 0.0, deadline)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Delivery deadline.
    pub fn deadline(&self) -> i32 {
        self.deadline
    }

    /// Overwrites the delivery deadline.
    pub fn set_deadline(&mut self, deadline: i32) {
        self.deadline = deadline;
    }

    /// Straight-line distance to another point.
    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Sum of absolute coordinate differences to another point.
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Distance to another point under `metric`.
    pub fn distance(&self, other: &Point, metric: Metric) -> f64 {
        metric.distance(self, other)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
