//! Hysteresis lock for the orientation label
//!
//! After a high-confidence decision the label is frozen for a fixed number of
//! calls, so transient poses (a closing fist) cannot flip it.

use super::model::Orientation;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrientationLock {
    /// Frozen label while the countdown runs
    label: Option<Orientation>,
    /// Calls left before scoring resumes
    remaining: u32,
}

impl OrientationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze `label` for the next `frames` calls to `take`
    pub fn engage(&mut self, label: Orientation, frames: u32) {
        if frames == 0 {
            self.clear();
            return;
        }
        self.label = Some(label);
        self.remaining = frames;
    }

    /// Consume one call of the countdown; returns the held label if still locked
    pub fn take(&mut self) -> Option<Orientation> {
        if self.remaining == 0 {
            self.label = None;
            return None;
        }
        self.remaining -= 1;
        let label = self.label;
        if self.remaining == 0 {
            self.label = None;
        }
        label
    }

    pub fn is_engaged(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn label(&self) -> Option<Orientation> {
        self.label
    }

    pub fn clear(&mut self) {
        self.label = None;
        self.remaining = 0;
    }
}
