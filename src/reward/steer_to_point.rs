//! Reward for steering toward a point ahead on the centerline
//!
//! Each step the track is oriented along the driving direction and densified.
//! The lookahead target is the first centerline point, walking forward from
//! the one nearest the car, that leaves a circle of `radius_scale ×
//! track_width` around it. The reward then falls off linearly with the gap
//! between the car's steering angle and the angle that would aim at that
//! target.

use super::config::RewardConfig;
use super::scorer::Scorer;
use super::RewardFunction;
use crate::error::RewardError;
use crate::params::{ParameterBundle, VehicleState};
use crate::steering::{locate_target, steering_target_degrees};
use crate::track::{orient, upsample};
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct SteerToPointAhead {
    config: RewardConfig,
}

impl SteerToPointAhead {
    pub fn with_config(config: RewardConfig) -> Self {
        SteerToPointAhead { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    fn scorer(&self) -> Scorer {
        Scorer {
            error_scale_degrees: self.config.error_scale_degrees,
            min_reward: self.config.min_reward,
        }
    }

    /// Ideal steering angle for a validated bundle, in (-180, 180]
    pub fn target_steering_degrees(&self, params: &ParameterBundle) -> Result<f64, RewardError> {
        let VehicleState {
            position,
            heading,
            track_width,
            is_reversed,
            ..
        } = params.vehicle();

        params
            .waypoints
            .len()
            .checked_mul(self.config.upsample_factor)
            .ok_or_else(|| {
                RewardError::invalid_parameter("upsample_factor", "too large for this track")
            })?;

        let oriented = orient(&params.waypoints, is_reversed);
        let densified = upsample(&oriented, self.config.upsample_factor);
        let radius = self.config.radius_scale * track_width;

        let target =
            locate_target(&densified, &position, radius).ok_or(RewardError::EmptyTrack)?;
        trace!(
            points = densified.len(),
            radius,
            target_x = target.x,
            target_y = target.y,
            "Located lookahead target"
        );

        Ok(steering_target_degrees(&target, &position, heading))
    }
}

impl RewardFunction for SteerToPointAhead {
    fn new() -> Self {
        SteerToPointAhead::default()
    }

    fn compute_reward(&self, params: &ParameterBundle) -> Result<f64, RewardError> {
        params.validate()?;

        let VehicleState { steering_angle, .. } = params.vehicle();
        let ideal = self.target_steering_degrees(params)?;
        let reward = self.scorer().score(ideal, steering_angle);

        debug!(
            ideal_steering = ideal,
            steering = steering_angle,
            reward,
            "Scored steering"
        );

        Ok(reward)
    }

    fn name(&self) -> &str {
        "SteerToPointAhead"
    }

    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), RewardError> {
        let mut config = self.config;
        config.configure(params)?;
        self.config = config;
        Ok(())
    }
}
