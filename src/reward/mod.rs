//! Reward functions consumed by the training harness

use crate::error::RewardError;
use crate::params::ParameterBundle;
use std::collections::HashMap;
use std::fmt::Debug;

/// Trait for per-step reward functions
pub trait RewardFunction: Debug + Send + Sync {
    /// Create a new instance with default parameters
    fn new() -> Self
    where
        Self: Sized;

    /// Compute the reward for one simulation step
    fn compute_reward(&self, params: &ParameterBundle) -> Result<f64, RewardError>;

    /// Get the name of this reward function
    fn name(&self) -> &str;

    /// Configure the reward function with named parameters
    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), RewardError>;
}

pub mod config;
pub mod scorer;
pub mod steer_to_point;

pub use config::RewardConfig;
pub use scorer::{score, Scorer};
pub use steer_to_point::SteerToPointAhead;
pub use steer_to_point::SteerToPointAhead as DefaultRewardFunction;
