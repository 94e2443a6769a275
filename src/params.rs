//! Per-step input handed over by the training harness
//!
//! The harness supplies one [`ParameterBundle`] per simulation tick. Its serde
//! field names match the harness keys exactly, so a JSON mapping such as
//! `{"x": 0.7, "y": 1.05, "heading": 160.0, ..., "waypoints": [[0.75, -0.7], ...]}`
//! converts directly. Validation happens once in [`ParameterBundle::validate`];
//! the pipeline stages downstream assume a well-formed bundle.

use crate::common::types::Point;
use crate::error::RewardError;
use serde::{Deserialize, Serialize};

/// Input parameter bundle for a single reward evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    pub x: f64,
    pub y: f64,
    /// Degrees, 0 along +x, counter-clockwise positive
    pub heading: f64,
    pub track_width: f64,
    pub is_reversed: bool,
    /// Degrees relative to heading
    pub steering_angle: f64,
    /// Track centerline, always counter-clockwise
    #[serde(with = "waypoint_pairs")]
    pub waypoints: Vec<Point>,
}

/// Vehicle pose and controls extracted from a bundle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub position: Point,
    pub heading: f64,
    pub steering_angle: f64,
    pub track_width: f64,
    pub is_reversed: bool,
}

impl ParameterBundle {
    /// Parse a bundle from the harness's JSON mapping
    pub fn from_json(json: &str) -> Result<Self, RewardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the contract the pipeline relies on
    pub fn validate(&self) -> Result<(), RewardError> {
        let scalars = [
            ("x", self.x),
            ("y", self.y),
            ("heading", self.heading),
            ("track_width", self.track_width),
            ("steering_angle", self.steering_angle),
        ];
        if let Some(&(field, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RewardError::NonFiniteInput { field });
        }

        if self.track_width <= 0.0 {
            return Err(RewardError::InvalidTrackWidth(self.track_width));
        }

        if self.waypoints.len() < 2 {
            return Err(RewardError::TooFewWaypoints {
                count: self.waypoints.len(),
            });
        }

        if self
            .waypoints
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(RewardError::NonFiniteInput { field: "waypoints" });
        }

        Ok(())
    }

    pub fn vehicle(&self) -> VehicleState {
        VehicleState {
            position: Point::new(self.x, self.y),
            heading: self.heading,
            steering_angle: self.steering_angle,
            track_width: self.track_width,
            is_reversed: self.is_reversed,
        }
    }

    /// Small ten-point loop with the vehicle in its upper-right bend.
    ///
    /// Used by the smoke binary and the regression tests.
    pub fn reference_fixture() -> Self {
        let waypoints = [
            (0.75, -0.7),
            (1.0, 0.0),
            (0.7, 0.52),
            (0.58, 0.7),
            (0.48, 0.8),
            (0.15, 0.95),
            (-0.1, 1.0),
            (-0.7, 0.75),
            (-0.9, 0.25),
            (-0.9, -0.55),
        ];

        ParameterBundle {
            x: 0.7,
            y: 1.05,
            heading: 160.0,
            track_width: 0.45,
            is_reversed: false,
            steering_angle: 0.0,
            waypoints: waypoints
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
        }
    }
}

/// Waypoints travel as `[x, y]` pairs on the wire
mod waypoint_pairs {
    use crate::common::types::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
    }
}
