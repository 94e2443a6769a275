//! Lookahead target selection and steering bearing
pub mod bearing;
pub mod lookahead;

pub use bearing::steering_target_degrees;
pub use lookahead::{locate_target, TrackCourse};
