//! Motion state tracking
//!
//! Keeps a rolling window of per-frame motion speeds and decides whether the
//! hand is moving or at rest.

use super::ring::RingBuffer;
use crate::hand::{Keypoint, KEYPOINT_COUNT};

/// Motion classifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionState {
    /// No accepted frame since the last reset
    #[default]
    Uninitialized,
    Moving,
    Stationary,
}

impl MotionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionState::Uninitialized => "uninitialized",
            MotionState::Moving => "moving",
            MotionState::Stationary => "stationary",
        }
    }
}

/// Per-frame displacement summary against the previous stabilized frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    /// Mean over all 21 keypoints ("motion speed")
    pub mean: f32,
    /// Worst single keypoint
    pub max: f32,
}

impl Displacement {
    pub fn between(current: &[Keypoint; KEYPOINT_COUNT], previous: &[Keypoint; KEYPOINT_COUNT]) -> Self {
        let mut total = 0.0;
        let mut max: f32 = 0.0;
        for (c, p) in current.iter().zip(previous.iter()) {
            let d = c.distance(*p);
            total += d;
            max = max.max(d);
        }
        Self {
            mean: total / KEYPOINT_COUNT as f32,
            max,
        }
    }
}

/// Moving/stationary state machine driven by motion speed
#[derive(Clone, Debug)]
pub struct MotionTracker {
    /// Recent motion speeds
    speeds: RingBuffer<f32>,
    /// Consecutive still frames so far
    still_frames: u32,
    state: MotionState,
    stillness_threshold: f32,
    stillness_frames: u32,
}

impl MotionTracker {
    pub fn new(speed_history: usize, stillness_threshold: f32, stillness_frames: u32) -> Self {
        Self {
            speeds: RingBuffer::new(speed_history),
            still_frames: 0,
            state: MotionState::Uninitialized,
            stillness_threshold,
            stillness_frames,
        }
    }

    /// First accepted frame after a reset
    pub fn start(&mut self) {
        self.speeds.clear();
        self.still_frames = 0;
        self.state = MotionState::Moving;
    }

    /// Record one accepted frame's speed and return the resulting state.
    ///
    /// A frame is still when both the sample and the window average are
    /// below threshold. One fast sample returns to `Moving` immediately.
    pub fn update(&mut self, speed: f32) -> MotionState {
        self.speeds.push(speed);
        let previous = self.state;

        if speed < self.stillness_threshold && self.speeds.mean() < self.stillness_threshold {
            self.still_frames = self.still_frames.saturating_add(1);
            if self.still_frames >= self.stillness_frames {
                self.state = MotionState::Stationary;
            }
        } else {
            self.still_frames = 0;
            self.state = MotionState::Moving;
        }

        if previous != self.state {
            tracing::trace!(
                from = previous.as_str(),
                to = self.state.as_str(),
                speed,
                "motion state changed"
            );
        }
        self.state
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn still_frames(&self) -> u32 {
        self.still_frames
    }

    /// Back to `Uninitialized`, history dropped
    pub fn reset(&mut self) {
        self.speeds.clear();
        self.still_frames = 0;
        self.state = MotionState::Uninitialized;
    }
}
