//! Error types for reward computation

use thiserror::Error;

/// Failure to produce a reward for a single simulation step
#[derive(Debug, Error)]
pub enum RewardError {
    #[error("malformed parameter bundle: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("track needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("non-finite value in `{field}`")]
    NonFiniteInput { field: &'static str },

    #[error("track width must be positive, got {0}")]
    InvalidTrackWidth(f64),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("no track points to steer towards")]
    EmptyTrack,
}

impl RewardError {
    pub(crate) fn invalid_parameter(name: &str, reason: &str) -> Self {
        RewardError::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
