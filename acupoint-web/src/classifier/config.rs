use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for palm/back classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    /// |PIP z - wrist z| needed before depth votes.
    pub depth_threshold: f32,
    /// |tip y - MCP y| needed before the vertical cue votes.
    pub vertical_threshold: f32,
    /// Mean tip-to-PIP distance above which fingers count as extended.
    pub extension_threshold: f32,
    /// |score| strictly above this engages the lock.
    pub confidence_threshold: i32,
    /// Calls a locked label is held for.
    pub lock_frames: u32,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            depth_threshold: 0.01,
            vertical_threshold: 0.05,
            extension_threshold: 0.06,
            confidence_threshold: 2,
            lock_frames: 10,
        }
    }
}

impl OrientationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.depth_threshold >= 0.0
            && self.vertical_threshold >= 0.0
            && self.extension_threshold >= 0.0)
        {
            return Err(Error::Config("orientation thresholds must be non-negative".into()));
        }
        if self.confidence_threshold < 0 {
            return Err(Error::Config("confidence_threshold must be non-negative".into()));
        }
        Ok(())
    }
}
