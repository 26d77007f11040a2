//! Distance metric selection.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// The distance function used to measure and build tours.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::Metric;
/// use u_delivery::models::Point;
///
/// let a = Point::new(0.0, 0.0, 0);
/// let b = Point::new(3.0, 4.0, 0);
/// assert_eq!(Metric::Euclidean.distance(&a, &b), 5.0);
/// assert_eq!(Metric::Manhattan.distance(&a, &b), 7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of absolute axis differences.
    Manhattan,
}

impl Metric {
    /// Distance between two points under this metric.
    #[inline]
    pub fn distance(self, a: &Point, b: &Point) -> f64 {
        match self {
            Metric::Euclidean => a.euclidean_distance(b),
            Metric::Manhattan => a.manhattan_distance(b),
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
