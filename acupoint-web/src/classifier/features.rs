//! Orientation signals extracted from a stabilized skeleton
//!
//! Three closed-form cues, each voting -1 (back), 0 (unsure) or +1 (palm):
//! - depth: PIP joints nearer the camera than the wrist
//! - vertical: fingertips above their MCP joints in image space
//! - extension: fingers open, tips far from their PIP joints

use super::config::OrientationConfig;
use crate::hand::{
    StabilizedFrame, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, RING_MCP,
    RING_PIP, RING_TIP, WRIST,
};

/// (MCP, PIP, TIP) for the three fingers used in scoring
const FINGERS: [(usize, usize, usize); 3] = [
    (INDEX_MCP, INDEX_PIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP, RING_TIP),
];

/// Depth counts double in the total
const DEPTH_WEIGHT: i32 = 2;

/// Raw measurements and their votes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSignals {
    /// Mean PIP z minus wrist z (negative = fingers toward camera)
    pub depth_delta: f32,
    /// Mean of tip.y - mcp.y (negative = tips above base)
    pub vertical_offset: f32,
    /// Mean tip-to-PIP distance
    pub extension: f32,
    pub depth_vote: i32,
    pub vertical_vote: i32,
    pub extension_vote: i32,
}

impl OrientationSignals {
    /// Weighted total: positive leans palm, non-positive leans back
    pub fn score(&self) -> i32 {
        DEPTH_WEIGHT * self.depth_vote + self.vertical_vote + self.extension_vote
    }
}

/// Vote -1/0/+1 on a signed measurement: below -threshold is +1
fn signed_vote(value: f32, threshold: f32) -> i32 {
    if value < -threshold {
        1
    } else if value > threshold {
        -1
    } else {
        0
    }
}

/// Extract orientation signals from a stabilized frame
pub fn extract_signals(frame: &StabilizedFrame, config: &OrientationConfig) -> OrientationSignals {
    let points = frame.keypoints();
    let wrist = points[WRIST];
    let n = FINGERS.len() as f32;

    let mut pip_z = 0.0;
    let mut vertical = 0.0;
    let mut extension = 0.0;
    for &(mcp, pip, tip) in FINGERS.iter() {
        pip_z += points[pip].z;
        vertical += points[tip].y - points[mcp].y;
        extension += points[tip].distance(points[pip]);
    }

    let depth_delta = pip_z / n - wrist.z;
    let vertical_offset = vertical / n;
    let extension = extension / n;

    OrientationSignals {
        depth_delta,
        vertical_offset,
        extension,
        depth_vote: signed_vote(depth_delta, config.depth_threshold),
        vertical_vote: signed_vote(vertical_offset, config.vertical_threshold),
        extension_vote: i32::from(extension > config.extension_threshold),
    }
}
