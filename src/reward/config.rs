//! Tunables for the steer-to-point-ahead reward

use super::scorer::{BAD_STEERING_DEGREES, MIN_REWARD};
use crate::error::RewardError;
use std::collections::HashMap;

/// Upper bound on points generated per track segment
pub const MAX_UPSAMPLE_FACTOR: usize = 10_000;

/// Defaults reproduce the reference reward exactly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardConfig {
    /// Points generated per original track segment
    pub upsample_factor: usize,
    /// Lookahead radius as a multiple of the track width
    pub radius_scale: f64,
    pub error_scale_degrees: f64,
    pub min_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            upsample_factor: 20,
            radius_scale: 0.9,
            error_scale_degrees: BAD_STEERING_DEGREES,
            min_reward: MIN_REWARD,
        }
    }
}

impl RewardConfig {
    /// Apply overrides by name. Unknown keys are ignored; a rejected value
    /// leaves the earlier fields of this call applied.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), RewardError> {
        if let Some(&factor) = params.get("upsample_factor") {
            if !(factor >= 1.0) || factor.fract() != 0.0 || !factor.is_finite() {
                return Err(RewardError::invalid_parameter(
                    "upsample_factor",
                    "must be a positive integer",
                ));
            }
            if factor > MAX_UPSAMPLE_FACTOR as f64 {
                return Err(RewardError::invalid_parameter(
                    "upsample_factor",
                    "must not exceed 10000",
                ));
            }
            self.upsample_factor = factor as usize;
        }

        if let Some(&radius_scale) = params.get("radius_scale") {
            if !(radius_scale > 0.0) || !radius_scale.is_finite() {
                return Err(RewardError::invalid_parameter(
                    "radius_scale",
                    "must be positive",
                ));
            }
            self.radius_scale = radius_scale;
        }

        if let Some(&error_scale) = params.get("error_scale_degrees") {
            if !(error_scale > 0.0) || !error_scale.is_finite() {
                return Err(RewardError::invalid_parameter(
                    "error_scale_degrees",
                    "must be positive",
                ));
            }
            self.error_scale_degrees = error_scale;
        }

        if let Some(&min_reward) = params.get("min_reward") {
            if !(0.0..=1.0).contains(&min_reward) {
                return Err(RewardError::invalid_parameter(
                    "min_reward",
                    "must lie in [0, 1]",
                ));
            }
            self.min_reward = min_reward;
        }

        Ok(())
    }
}
