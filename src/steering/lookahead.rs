//! Radius-exit lookahead on a closed track polyline

use crate::common::geometry::dist;
use crate::common::types::Point;

/// Densified track loop the lookahead search runs over
#[derive(Debug, Clone, Copy)]
pub struct TrackCourse<'a> {
    points: &'a [Point],
}

impl<'a> TrackCourse<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        TrackCourse { points }
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Index of the point nearest to `vehicle`, first one on ties
    pub fn closest_index(&self, vehicle: &Point) -> Option<usize> {
        let mut closest = None;
        let mut d_min = f64::INFINITY;

        for (i, p) in self.points.iter().enumerate() {
            let d = dist(p, vehicle);
            if closest.is_none() || d < d_min {
                d_min = d;
                closest = Some(i);
            }
        }

        closest
    }

    /// Walk forward from the closest point and return the index of the first
    /// point that is no longer strictly inside `radius`.
    ///
    /// Falls back to the closest index when the whole loop lies inside the
    /// circle. Returns `None` only for an empty course.
    pub fn search_target_index(&self, vehicle: &Point, radius: f64) -> Option<usize> {
        let closest = self.closest_index(vehicle)?;
        let n = self.points.len();

        let target = (0..n)
            .map(|offset| (closest + offset) % n)
            // NaN distances count as outside
            .find(|&i| !(dist(&self.points[i], vehicle) < radius))
            .unwrap_or(closest);

        Some(target)
    }
}

/// Lookahead target on a densified track for a vehicle at `vehicle`
pub fn locate_target(densified: &[Point], vehicle: &Point, radius: f64) -> Option<Point> {
    let course = TrackCourse::new(densified);
    course
        .search_target_index(vehicle, radius)
        .and_then(|i| course.point(i))
}
