use anyhow::{ensure, Context, Result};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;
use track_reward::common::geometry::dist;
use track_reward::reward::SteerToPointAhead;
use track_reward::steering::locate_target;
use track_reward::track::{orient, upsample};
use track_reward::{ParameterBundle, Point, RewardFunction};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut reward = SteerToPointAhead::new();

    // Explicitly pin the reference tunables
    let mut params = HashMap::new();
    params.insert("upsample_factor".to_string(), 20.0);
    params.insert("radius_scale".to_string(), 0.9);
    reward.configure(&params)?;

    info!("Using reward function: {}", reward.name());

    let fixture = ParameterBundle::reference_fixture();
    let vehicle = fixture.vehicle();

    let densified = upsample(&orient(&fixture.waypoints, vehicle.is_reversed), 2);
    info!("Upsampled track (factor 2): {:?}", densified);

    let densified = upsample(
        &orient(&fixture.waypoints, vehicle.is_reversed),
        reward.config().upsample_factor,
    );
    let radius = reward.config().radius_scale * vehicle.track_width;
    let target =
        locate_target(&densified, &vehicle.position, radius).context("no lookahead target")?;
    info!("Target point: x={}, y={}", target.x, target.y);
    ensure!(
        dist(&target, &Point::new(0.33, 0.86)) < 0.1,
        "target point drifted from the reference"
    );

    let ideal = reward.target_steering_degrees(&fixture)?;
    info!("Target steering: {}", ideal);
    ensure!((ideal - 46.0).abs() < 1.0, "target steering drifted from the reference");

    let reward_value = reward.compute_reward(&fixture)?;
    info!("Reward: {}", reward_value);
    ensure!(reward_value > 0.0, "reward must stay positive");

    let mut scores = Vec::new();
    for steering_angle in [45.0, 15.0, 0.0, -15.0, -45.0] {
        let params = ParameterBundle {
            steering_angle,
            ..fixture.clone()
        };
        scores.push(reward.compute_reward(&params)?);
    }
    info!("Scores for steering 45, 15, 0, -15, -45: {:?}", scores);

    let reversed = ParameterBundle {
        is_reversed: true,
        ..fixture
    };
    info!(
        "Reversed direction: target steering={}, reward={}",
        reward.target_steering_degrees(&reversed)?,
        reward.compute_reward(&reversed)?
    );

    info!("All checks passed");
    Ok(())
}
