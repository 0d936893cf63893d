//! Display debouncing for published target points
//!
//! The stabilizer already removes sub-threshold jitter in keypoints; this is a
//! second, coarser gate on the derived points an overlay actually draws.

use nalgebra::Point2;

use super::targets::TargetName;

const SLOTS: usize = TargetName::ALL.len();

/// Holds the last published position per target
#[derive(Clone, Debug)]
pub struct TargetDebouncer {
    published: [Option<Point2<f32>>; SLOTS],
    /// Minimum |dx| or |dy| before a published point moves
    threshold: f32,
}

impl TargetDebouncer {
    pub fn new(threshold: f32) -> Self {
        Self {
            published: [None; SLOTS],
            threshold,
        }
    }

    /// Returns the position to display for `target`.
    ///
    /// `None` always clears. A new position replaces the published one only
    /// when it moved more than the threshold on either axis.
    pub fn update(&mut self, target: TargetName, position: Option<Point2<f32>>) -> Option<Point2<f32>> {
        let slot = &mut self.published[target as usize];
        match (position, *slot) {
            (None, _) => *slot = None,
            (Some(new), Some(last))
                if (new.x - last.x).abs() <= self.threshold && (new.y - last.y).abs() <= self.threshold => {}
            (Some(new), _) => *slot = Some(new),
        }
        *slot
    }

    pub fn published(&self, target: TargetName) -> Option<Point2<f32>> {
        self.published[target as usize]
    }

    pub fn clear(&mut self) {
        self.published = [None; SLOTS];
    }
}
