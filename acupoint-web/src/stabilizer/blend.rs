//! Smoothing primitives
//!
//! Recency-weighted moving average over raw frames, then an exponential blend
//! against the previous output with a per-coordinate dead zone and a
//! per-keypoint displacement clamp.

use nalgebra::Vector3;

use crate::hand::{Keypoint, KEYPOINT_COUNT};

pub type Skeleton = [Keypoint; KEYPOINT_COUNT];

/// Linearly weighted average, oldest frame weight 1, newest weight n.
///
/// Returns `None` for an empty window.
pub fn weighted_average<'a, I>(frames: I) -> Option<Skeleton>
where
    I: IntoIterator<Item = &'a Skeleton>,
{
    let mut sums = [Vector3::<f32>::zeros(); KEYPOINT_COUNT];
    let mut total_weight = 0.0_f32;

    for (i, frame) in frames.into_iter().enumerate() {
        let weight = (i + 1) as f32;
        for (sum, keypoint) in sums.iter_mut().zip(frame.iter()) {
            *sum += keypoint.to_vector() * weight;
        }
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return None;
    }
    Some(sums.map(|sum| Keypoint::from_vector(sum / total_weight)))
}

/// Blend one coordinate toward `target`, holding it when the pending change
/// is inside the dead zone.
pub fn blend_coordinate(previous: f32, target: f32, alpha: f32, dead_zone: f32) -> f32 {
    let pending = target - previous;
    if pending.abs() < dead_zone {
        previous
    } else {
        previous + alpha * pending
    }
}

/// Limit a keypoint's move to `ceiling`, keeping its direction
pub fn clamp_displacement(previous: Keypoint, next: Keypoint, ceiling: f32) -> Keypoint {
    let delta = next.to_vector() - previous.to_vector();
    let distance = delta.norm();
    if distance <= ceiling {
        return next;
    }
    Keypoint::from_vector(previous.to_vector() + delta * (ceiling / distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: f32) -> Skeleton {
        [Keypoint::new(value, value, value); KEYPOINT_COUNT]
    }

    #[test]
    fn test_weighted_average_favors_recent() {
        let frames = [filled(0.0), filled(0.3)];
        let avg = weighted_average(frames.iter()).unwrap();
        // weights 1 and 2: (0 * 1 + 0.3 * 2) / 3
        assert!((avg[0].x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_average_of_identical_frames_is_exact() {
        let frames = [filled(0.5), filled(0.5), filled(0.5)];
        let avg = weighted_average(frames.iter()).unwrap();
        assert_eq!(avg[12], Keypoint::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_weighted_average_empty() {
        let frames: [Skeleton; 0] = [];
        assert!(weighted_average(frames.iter()).is_none());
    }

    #[test]
    fn test_dead_zone_holds_small_changes() {
        assert_eq!(blend_coordinate(0.5, 0.5005, 0.75, 0.001), 0.5);
        let moved = blend_coordinate(0.5, 0.6, 0.5, 0.001);
        assert!((moved - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_keeps_direction() {
        let previous = Keypoint::new(0.0, 0.0, 0.0);
        let clamped = clamp_displacement(previous, Keypoint::new(0.6, 0.8, 0.0), 0.1);
        assert!((clamped.x - 0.06).abs() < 1e-6);
        assert!((clamped.y - 0.08).abs() < 1e-6);

        let small = Keypoint::new(0.01, 0.0, 0.0);
        assert_eq!(clamp_displacement(previous, small, 0.1), small);
    }
}
