//! Stabilization engine - the per-frame filter pipeline
//!
//! Order per frame: anomaly gate → motion state → weighted window average →
//! role-weighted exponential blend with dead zone → displacement clamp.

use super::blend::{blend_coordinate, clamp_displacement, weighted_average, Skeleton};
use super::config::StabilizerConfig;
use super::motion::{Displacement, MotionState, MotionTracker};
use super::ring::RingBuffer;
use crate::error::Result;
use crate::hand::{FrameSample, Keypoint, KeypointRole, StabilizedFrame, KEYPOINT_COUNT};

/// Temporal filter for one hand.
///
/// Owns all rolling history; every mutation goes through `&mut self`, so a
/// single engine can never see overlapping frames.
pub struct StabilizationEngine {
    config: StabilizerConfig,
    /// Last emitted frame
    last: Option<StabilizedFrame>,
    /// Recently accepted raw frames
    history: RingBuffer<Skeleton>,
    motion: MotionTracker,
    /// Above-ceiling frames dropped in a row; saturates while following a
    /// sustained jump
    rejected: u32,
    /// Blend factor per keypoint for each motion state, precomputed
    moving_alphas: [f32; KEYPOINT_COUNT],
    stationary_alphas: [f32; KEYPOINT_COUNT],
}

impl StabilizationEngine {
    pub fn new(config: StabilizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: StabilizerConfig) -> Self {
        let alphas = |base: f32| -> [f32; KEYPOINT_COUNT] {
            std::array::from_fn(|i| base * config.role_factor(KeypointRole::of(i)))
        };
        let moving_alphas = alphas(config.moving_alpha);
        let stationary_alphas = alphas(config.stationary_alpha);

        Self {
            history: RingBuffer::new(config.history_capacity()),
            motion: MotionTracker::new(
                config.speed_history,
                config.stillness_threshold,
                config.stillness_frames,
            ),
            last: None,
            rejected: 0,
            moving_alphas,
            stationary_alphas,
            config,
        }
    }

    /// Feed one detection (or `None` for "no hand") and get the filtered frame.
    ///
    /// - `None` resets all state and returns `None`.
    /// - The first frame after a reset is returned unmodified.
    /// - A frame whose worst keypoint jumps past the velocity ceiling is
    ///   dropped; the previous output is returned and history is untouched.
    ///   Once `max_consecutive_rejections` such frames have been dropped in a
    ///   row, further ones are taken as a real move: history restarts from
    ///   each of them and the output follows, clamped to the ceiling per
    ///   frame, until a frame lands within the ceiling again.
    pub fn ingest(&mut self, frame: Option<FrameSample>) -> Option<StabilizedFrame> {
        let Some(sample) = frame else {
            self.reset();
            return None;
        };

        if self.last.is_none() {
            return Some(self.bootstrap(sample));
        }
        let previous = self.last.as_ref()?;

        let displacement = Displacement::between(sample.keypoints(), previous.keypoints());
        if displacement.max > self.config.velocity_ceiling {
            if self.rejected < self.config.max_consecutive_rejections {
                self.rejected += 1;
                tracing::debug!(
                    max_displacement = displacement.max,
                    ceiling = self.config.velocity_ceiling,
                    rejected = self.rejected,
                    "rejecting frame above velocity ceiling"
                );
                return Some(previous.clone());
            }
            // Sustained jump: the raw history describes a pose the hand has
            // left. Follow the new pose, at most `ceiling` per frame.
            tracing::debug!(
                max_displacement = displacement.max,
                "re-anchoring history after sustained jump"
            );
            self.history.clear();
        } else {
            self.rejected = 0;
        }

        let state = self.motion.update(displacement.mean);
        self.history.push(*sample.keypoints());

        let (window, alphas) = match state {
            MotionState::Stationary => (self.config.stationary_window, &self.stationary_alphas),
            _ => (self.config.moving_window, &self.moving_alphas),
        };
        let candidate = weighted_average(self.history.recent(window)).unwrap_or(*sample.keypoints());

        let previous_points = previous.keypoints();
        let dead_zone = self.config.dead_zone;
        let ceiling = self.config.velocity_ceiling;
        let smoothed: Skeleton = std::array::from_fn(|i| {
            let prev = previous_points[i];
            let target = candidate[i];
            let alpha = alphas[i];
            let blended = Keypoint::new(
                blend_coordinate(prev.x, target.x, alpha, dead_zone),
                blend_coordinate(prev.y, target.y, alpha, dead_zone),
                blend_coordinate(prev.z, target.z, alpha, dead_zone),
            );
            clamp_displacement(prev, blended, ceiling)
        });

        let output = StabilizedFrame::new(smoothed, sample.handedness());
        self.last = Some(output.clone());
        Some(output)
    }

    fn bootstrap(&mut self, sample: FrameSample) -> StabilizedFrame {
        self.history.clear();
        self.history.push(*sample.keypoints());
        self.motion.start();
        self.rejected = 0;

        let output = StabilizedFrame::from(sample);
        self.last = Some(output.clone());
        tracing::debug!("stabilizer bootstrapped from first frame");
        output
    }

    /// Drop all history (camera switch, prolonged detection loss)
    pub fn reset(&mut self) {
        if self.last.is_some() {
            tracing::debug!("stabilizer reset");
        }
        self.last = None;
        self.history.clear();
        self.motion.reset();
        self.rejected = 0;
    }

    pub fn motion_state(&self) -> MotionState {
        self.motion.state()
    }

    pub fn is_stationary(&self) -> bool {
        self.motion.state() == MotionState::Stationary
    }

    /// Last emitted frame, if any
    pub fn last(&self) -> Option<&StabilizedFrame> {
        self.last.as_ref()
    }

    /// Raw frames currently held in history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn config(&self) -> &StabilizerConfig {
        &self.config
    }
}

impl Default for StabilizationEngine {
    fn default() -> Self {
        Self::with_valid_config(StabilizerConfig::default())
    }
}
