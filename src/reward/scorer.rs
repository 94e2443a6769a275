//! Steering error to reward mapping

/// Steering error, in degrees, that already counts as completely wrong
pub const BAD_STEERING_DEGREES: f64 = 60.0;

/// Smallest reward handed back to the optimizer. Zero or negative rewards
/// make it train poorly.
pub const MIN_REWARD: f64 = 0.01;

/// Linear falloff from 1.0 at zero error down to a positive floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub error_scale_degrees: f64,
    pub min_reward: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer {
            error_scale_degrees: BAD_STEERING_DEGREES,
            min_reward: MIN_REWARD,
        }
    }
}

impl Scorer {
    pub fn score(&self, ideal_steering_degrees: f64, actual_steering_degrees: f64) -> f64 {
        let error = (actual_steering_degrees - ideal_steering_degrees) / self.error_scale_degrees;
        let score = 1.0 - error.abs();

        score.max(self.min_reward)
    }
}

/// Score with the default constants
pub fn score(ideal_steering_degrees: f64, actual_steering_degrees: f64) -> f64 {
    Scorer::default().score(ideal_steering_degrees, actual_steering_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_perfect_steering_scores_one() {
        for ideal in [-120.0, -46.3, 0.0, 12.5, 180.0] {
            assert_eq!(score(ideal, ideal), 1.0);
        }
    }

    #[test]
    fn test_sixty_degrees_off_hits_the_floor() {
        for ideal in [-30.0, 0.0, 10.0, 45.0] {
            assert_eq!(score(ideal, ideal + 60.0), MIN_REWARD);
            assert_eq!(score(ideal, ideal - 60.0), MIN_REWARD);
        }
    }

    #[test]
    fn test_linear_falloff() {
        assert_abs_diff_eq!(score(0.0, 30.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(score(10.0, -5.0), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_score_is_bounded() {
        let mut ideal = -180.0;
        while ideal <= 180.0 {
            let mut actual = -400.0;
            while actual <= 400.0 {
                let s = score(ideal, actual);
                assert!((MIN_REWARD..=1.0).contains(&s), "score({ideal}, {actual}) = {s}");
                actual += 13.7;
            }
            ideal += 11.3;
        }
    }

    #[test]
    fn test_custom_scale() {
        let scorer = Scorer {
            error_scale_degrees: 30.0,
            min_reward: 0.0,
        };
        assert_abs_diff_eq!(scorer.score(0.0, 15.0), 0.5, epsilon = 1e-12);
        assert_eq!(scorer.score(0.0, 90.0), 0.0);
    }
}
