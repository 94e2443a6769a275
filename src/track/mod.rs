//! Track centerline preparation
//!
//! Waypoints arrive counter-clockwise regardless of the driving direction and
//! form a closed loop: the last point connects back to the first.

use crate::common::types::Point;
use std::borrow::Cow;

/// Order waypoints along the direction of travel
pub fn orient(waypoints: &[Point], is_reversed: bool) -> Cow<'_, [Point]> {
    if is_reversed {
        // driving clockwise
        Cow::Owned(waypoints.iter().rev().copied().collect())
    } else {
        Cow::Borrowed(waypoints)
    }
}

/// Densify the closed loop with `factor` evenly spaced points per segment.
///
/// Point `i` of segment `j` sits `i / factor` of the way from `p[j]` to
/// `p[(j + 1) % n]`, so every segment starts exactly on its original waypoint.
pub fn upsample(waypoints: &[Point], factor: usize) -> Vec<Point> {
    let n = waypoints.len();
    let mut dense = Vec::with_capacity(n.saturating_mul(factor));

    for j in 0..n {
        let start = waypoints[j].coords;
        let end = waypoints[(j + 1) % n].coords;
        for i in 0..factor {
            let t = i as f64 / factor as f64;
            dense.push(Point::from(start.lerp(&end, t)));
        }
    }

    dense
}
