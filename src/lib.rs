pub mod common;
pub mod error;
pub mod params;
pub mod reward;
pub mod steering;
pub mod track;

pub use crate::common::types::Point;
pub use crate::error::RewardError;
pub use crate::params::{ParameterBundle, VehicleState};
pub use crate::reward::{DefaultRewardFunction, RewardFunction};

/// Reward for one simulation step using the default steer-to-point-ahead scoring
pub fn reward_function(params: &ParameterBundle) -> Result<f64, RewardError> {
    DefaultRewardFunction::new().compute_reward(params)
}
