//! Common utilities and types for the track reward pipeline

/// Common types used across the codebase
pub mod types {
    /// A 2D point in the track's planar frame
    pub type Point = nalgebra::Point2<f64>;
}

/// Planar geometry helpers working in degrees
pub mod geometry {
    use super::types::Point;

    /// Euclidean distance between two points
    pub fn dist(a: &Point, b: &Point) -> f64 {
        nalgebra::distance(a, b)
    }

    /// Convert polar coordinates (`theta` in degrees) to cartesian `(x, y)`
    pub fn rect(r: f64, theta: f64) -> (f64, f64) {
        let theta = theta.to_radians();
        (r * theta.cos(), r * theta.sin())
    }

    /// Convert cartesian coordinates to `(r, theta)` with `theta` in degrees.
    ///
    /// `theta` follows `atan2`, so it lies in (-180, 180] and is 0 for the origin.
    pub fn polar(x: f64, y: f64) -> (f64, f64) {
        let r = x.hypot(y);
        let theta = y.atan2(x).to_degrees();
        (r, theta)
    }

    /// Map an angle in degrees onto the half-open interval (-180, 180]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let n = (angle / 360.0).floor();
        let wrapped = angle - n * 360.0;

        if wrapped <= 180.0 {
            wrapped
        } else {
            wrapped - 360.0
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_abs_diff_eq;

        #[test]
        fn test_normalize_literals() {
            let eps = 1e-3;
            assert_abs_diff_eq!(normalize_degrees(270.0), -90.0, epsilon = eps);
            assert_abs_diff_eq!(normalize_degrees(362.0), 2.0, epsilon = eps);
            assert_abs_diff_eq!(normalize_degrees(181.0), -179.0, epsilon = eps);
            assert_abs_diff_eq!(normalize_degrees(-722.0), -2.0, epsilon = eps);
            assert_abs_diff_eq!(normalize_degrees(360.01), 0.01, epsilon = eps);
            assert_abs_diff_eq!(normalize_degrees(365.0), 5.0, epsilon = eps);
        }

        #[test]
        fn test_normalize_boundaries() {
            assert_eq!(normalize_degrees(180.0), 180.0);
            assert_eq!(normalize_degrees(-180.0), 180.0);
            assert_eq!(normalize_degrees(0.0), 0.0);
            assert_eq!(normalize_degrees(360.0), 0.0);
        }

        #[test]
        fn test_normalize_is_periodic_and_bounded() {
            let mut angle = -1000.0;
            while angle < 1000.0 {
                let base = normalize_degrees(angle);
                assert!(base > -180.0 && base <= 180.0, "{angle} -> {base}");

                for k in [-3.0, -1.0, 1.0, 4.0] {
                    let shifted = normalize_degrees(angle + 360.0 * k);
                    // 180 and -180 are the same direction but land on opposite ends
                    let diff = normalize_degrees(shifted - base);
                    assert_abs_diff_eq!(diff, 0.0, epsilon = 1e-9);
                }
                angle += 7.3;
            }
        }

        #[test]
        fn test_polar_rect_inverse() {
            for &(x, y) in &[(1.0, 0.0), (-0.4, 0.9), (0.0, -2.5), (-3.0, -1.0)] {
                let (r, theta) = polar(x, y);
                let (rx, ry) = rect(r, theta);
                assert_abs_diff_eq!(rx, x, epsilon = 1e-12);
                assert_abs_diff_eq!(ry, y, epsilon = 1e-12);
            }
        }

        #[test]
        fn test_polar_origin() {
            assert_eq!(polar(0.0, 0.0), (0.0, 0.0));
            let (_, theta) = polar(-1.0, 0.0);
            assert_abs_diff_eq!(theta, 180.0, epsilon = 1e-12);
        }

        #[test]
        fn test_dist() {
            let a = Point::new(0.0, 0.0);
            let b = Point::new(3.0, 4.0);
            assert_abs_diff_eq!(dist(&a, &b), 5.0, epsilon = 1e-12);
        }
    }
}
