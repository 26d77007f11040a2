//! Dense distance matrix.

use super::Metric;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per heuristic run so that repeated lookups while scanning
/// candidates do not recompute square roots.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::{DistanceMatrix, Metric};
/// use u_delivery::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0),
///     Point::new(3.0, 4.0, 10),
///     Point::new(6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Metric::Euclidean);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise distances of `points` under `metric`.
    pub fn from_points(points: &[Point], metric: Metric) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = metric.distance(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the closest location to `from` whose `visited` flag is unset.
    ///
    /// Scans left to right and only replaces the incumbent on a strictly
    /// smaller distance, so the lowest index wins ties. Returns `None` when
    /// every location is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = self.get(from, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, 0),
            Point::new(3.0, 4.0, 10),
            Point::new(0.0, 8.0, 20),
        ]
    }

    #[test]
    fn test_from_points_euclidean() {
        let dm = DistanceMatrix::from_points(&sample_points(), Metric::Euclidean);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_points_manhattan() {
        let dm = DistanceMatrix::from_points(&sample_points(), Metric::Manhattan);
        assert!((dm.get(0, 1) - 7.0).abs() < 1e-10);
        assert!((dm.get(1, 2) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points(), Metric::Euclidean);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[], Metric::Manhattan);
        assert_eq!(dm.size(), 0);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_nearest_unvisited() {
        let dm = DistanceMatrix::from_points(&sample_points(), Metric::Euclidean);
        // From (0,0): (3,4) is 5 away, (0,8) is 8 away
        assert_eq!(dm.nearest_unvisited(0, &[true, false, false]), Some(1));
        assert_eq!(dm.nearest_unvisited(0, &[true, true, false]), Some(2));
        assert_eq!(dm.nearest_unvisited(0, &[true, true, true]), None);
    }

    #[test]
    fn test_nearest_unvisited_tie_takes_lowest_index() {
        let points = vec![
            Point::new(0.0, 0.0, 0),
            Point::new(0.0, 5.0, 0),
            Point::new(5.0, 0.0, 0),
        ];
        let dm = DistanceMatrix::from_points(&points, Metric::Euclidean);
        assert_eq!(dm.nearest_unvisited(0, &[true, false, false]), Some(1));
    }
}
