//! Error types for sequence access and configuration loading.

use std::fmt;

/// Error raised by positional access into a point sequence or route.
///
/// # Examples
///
/// ```
/// use u_delivery::models::PointSequence;
/// use u_delivery::SequenceError;
///
/// let seq = PointSequence::new();
/// assert_eq!(seq.last(), Err(SequenceError::EmptyCollection));
/// assert_eq!(
///     seq.at(3),
///     Err(SequenceError::IndexOutOfRange { index: 3, len: 0 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested index is outside `[0, len)`.
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of points held at the time of the call.
        len: usize,
    },
    /// The last element was requested from an empty sequence.
    EmptyCollection,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of length {len}")
            }
            Self::EmptyCollection => write!(f, "sequence is empty"),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Error raised while loading a [`PlannerConfig`](crate::config::PlannerConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the config schema.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid planner config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let e = SequenceError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            e.to_string(),
            "index 5 out of range for sequence of length 2"
        );
    }

    #[test]
    fn test_empty_error_display() {
        assert_eq!(SequenceError::EmptyCollection.to_string(), "sequence is empty");
    }

    #[test]
    fn test_config_error_source() {
        use std::error::Error;

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = ConfigError::from(parse);
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("invalid planner config"));
    }
}
