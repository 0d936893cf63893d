use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hand::KeypointRole;

/// Configuration for the stabilization engine.
///
/// Every threshold here is a tuning knob, not a physical constant. Distances
/// are in normalized image units per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Raw frames averaged while the hand is moving.
    pub moving_window: usize,
    /// Raw frames averaged while the hand is at rest.
    pub stationary_window: usize,
    /// Per-frame motion speeds kept for the stillness average.
    pub speed_history: usize,
    /// Mean keypoint displacement below which a frame counts as still.
    pub stillness_threshold: f32,
    /// Consecutive still frames required to enter the stationary state.
    pub stillness_frames: u32,
    /// Blend factor at rest (small = strong smoothing).
    pub stationary_alpha: f32,
    /// Blend factor in motion (large = fast response).
    pub moving_alpha: f32,
    /// Blend multiplier for fingertips.
    pub tip_factor: f32,
    /// Blend multiplier for PIP/DIP/IP joints.
    pub joint_factor: f32,
    /// Blend multiplier for wrist, CMC and MCP points.
    pub palm_factor: f32,
    /// Largest plausible per-keypoint displacement between frames.
    ///
    /// A frame whose worst keypoint moves further is dropped as a detector glitch.
    pub velocity_ceiling: f32,
    /// Above-ceiling frames dropped in a row before the engine accepts that
    /// the hand really moved and re-anchors its history on the new position.
    pub max_consecutive_rejections: u32,
    /// Coordinate changes smaller than this are held at the previous value.
    pub dead_zone: f32,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            moving_window: 3,
            stationary_window: 6,
            speed_history: 8,
            stillness_threshold: 0.005,
            stillness_frames: 3,
            stationary_alpha: 0.1,
            moving_alpha: 0.75,
            tip_factor: 0.8,
            joint_factor: 0.9,
            palm_factor: 1.0,
            velocity_ceiling: 0.15,
            max_consecutive_rejections: 2,
            dead_zone: 0.001,
        }
    }
}

impl StabilizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.moving_window == 0 || self.stationary_window == 0 {
            return Err(Error::Config("history windows must be at least one frame".into()));
        }
        if self.speed_history == 0 {
            return Err(Error::Config("speed_history must be at least one frame".into()));
        }
        if self.stillness_frames == 0 {
            return Err(Error::Config("stillness_frames must be at least one".into()));
        }
        for (name, value) in [
            ("stationary_alpha", self.stationary_alpha),
            ("moving_alpha", self.moving_alpha),
            ("tip_factor", self.tip_factor),
            ("joint_factor", self.joint_factor),
            ("palm_factor", self.palm_factor),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::Config(format!("{name} must be in (0, 1], got {value}")));
            }
        }
        if !(self.velocity_ceiling > 0.0) {
            return Err(Error::Config("velocity_ceiling must be positive".into()));
        }
        if !(self.stillness_threshold >= 0.0 && self.dead_zone >= 0.0) {
            return Err(Error::Config("thresholds must be non-negative".into()));
        }
        Ok(())
    }

    /// Frames the history buffer must hold
    pub fn history_capacity(&self) -> usize {
        self.moving_window.max(self.stationary_window)
    }

    pub fn role_factor(&self, role: KeypointRole) -> f32 {
        match role {
            KeypointRole::Tip => self.tip_factor,
            KeypointRole::Joint => self.joint_factor,
            KeypointRole::Palm => self.palm_factor,
        }
    }
}
