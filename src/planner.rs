//! Construct-then-improve pipeline.

use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::Tour;

/// Builds a nearest-neighbor tour from `tour`, then refines it with 2-opt
/// when `config.improve` is set.
///
/// Works for both [`PointSequence`](crate::models::PointSequence) and
/// [`Route`](crate::models::Route); a route keeps its depots. The input is
/// not modified.
///
/// # Examples
///
/// ```
/// use u_delivery::config::PlannerConfig;
/// use u_delivery::distance::Metric;
/// use u_delivery::models::{Point, Route, Tour};
/// use u_delivery::planner::plan;
///
/// let mut route = Route::with_deadline(100);
/// route.add(Point::new(5.0, 5.0, 30));
/// route.add(Point::new(0.0, 5.0, 10));
/// route.add(Point::new(5.0, 0.0, 20));
///
/// let planned = plan(&route, &PlannerConfig::default());
/// assert!((planned.length(Metric::Euclidean) - 20.0).abs() < 1e-10);
/// assert_eq!(planned.num_stops(), 3);
/// ```
pub fn plan<T: Tour>(tour: &T, config: &PlannerConfig) -> T {
    let metric = config.metric;
    let initial = tour.length(metric);

    let constructed = tour.greedy_route(metric);
    let constructed_len = constructed.length(metric);

    let result = if config.improve {
        constructed.opt2_rearrange(metric)
    } else {
        constructed
    };

    debug!(
        points = tour.len(),
        %metric,
        initial,
        constructed = constructed_len,
        planned = result.length(metric),
        "planned tour"
    );
    result
}
