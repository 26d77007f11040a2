//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::distance::Metric;
use crate::error::ConfigError;

/// Settings for [`plan`](crate::planner::plan).
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use u_delivery::config::PlannerConfig;
/// use u_delivery::distance::Metric;
///
/// let config = PlannerConfig::from_json(r#"{ "metric": "manhattan" }"#).unwrap();
/// assert_eq!(config.metric, Metric::Manhattan);
/// assert!(config.improve);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Metric used for construction, improvement and reported lengths.
    pub metric: Metric,
    /// Run 2-opt after nearest-neighbor construction.
    pub improve: bool,
}

impl PlannerConfig {
    /// Creates the default configuration: Euclidean metric with 2-opt.
    pub fn new() -> Self {
        Self {
            metric: Metric::Euclidean,
            improve: true,
        }
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Enables or disables the 2-opt stage.
    pub fn with_improve(mut self, improve: bool) -> Self {
        self.improve = improve;
        self
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
