use crate::common::geometry::{normalize_degrees, polar};
use crate::common::types::Point;

/// Steering angle, relative to `heading_degrees`, that points the vehicle at
/// `target`. Lies in (-180, 180].
pub fn steering_target_degrees(target: &Point, vehicle: &Point, heading_degrees: f64) -> f64 {
    let delta = target - vehicle;
    let (_, target_angle) = polar(delta.x, delta.y);

    normalize_degrees(target_angle - heading_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fixture_bearing() {
        let target = Point::new(0.3315, 0.8675);
        let vehicle = Point::new(0.7, 1.05);
        let steering = steering_target_degrees(&target, &vehicle, 160.0);
        assert!((steering - 46.0).abs() < 1.0, "steering = {steering}");
        assert_abs_diff_eq!(steering, 46.3469606280853, epsilon = 1e-9);
    }

    #[test]
    fn test_straight_ahead_and_behind() {
        let vehicle = Point::new(1.0, 1.0);
        assert_abs_diff_eq!(
            steering_target_degrees(&Point::new(1.0, 2.0), &vehicle, 90.0),
            0.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            steering_target_degrees(&Point::new(1.0, 0.0), &vehicle, 90.0),
            180.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_wraps_across_the_back() {
        // target at bearing -170, heading 170: turn 20 degrees left
        let (x, y) = crate::common::geometry::rect(1.0, -170.0);
        let steering = steering_target_degrees(&Point::new(x, y), &Point::origin(), 170.0);
        assert_abs_diff_eq!(steering, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_target() {
        let p = Point::new(0.5, 0.5);
        assert_abs_diff_eq!(steering_target_degrees(&p, &p, 30.0), -30.0, epsilon = 1e-12);
    }
}
