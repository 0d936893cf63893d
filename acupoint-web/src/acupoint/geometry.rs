//! 2D construction helpers over keypoints
//!
//! Screen-space only: depth is dropped before any construction.

use nalgebra::Point2;

/// Midpoint of two points
pub fn midpoint(a: Point2<f32>, b: Point2<f32>) -> Point2<f32> {
    nalgebra::center(&a, &b)
}

/// Linear interpolation: `t = 0` is `a`, `t = 1` is `b`
pub fn interpolate(a: Point2<f32>, b: Point2<f32>, t: f32) -> Point2<f32> {
    a + (b - a) * t
}

/// Euclidean distance
pub fn distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}
