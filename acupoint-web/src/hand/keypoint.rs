//! Hand keypoints - MediaPipe's 21-point hand topology
//!
//! Indices have fixed anatomical meaning and are never reordered.

use nalgebra::{Point2, Vector3};

// ============================================================================
// HAND KEYPOINT INDICES
// ============================================================================

pub const KEYPOINT_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Hand skeleton connections, for overlays drawn by the caller
pub const HAND_SKELETON: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ============================================================================
// ANATOMICAL ROLE
// ============================================================================

/// How noisy a keypoint tends to be, which drives how hard it is smoothed.
///
/// Tips jitter the most, palm points (wrist, CMC and the MCP row) the least.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypointRole {
    Palm,
    Joint,
    Tip,
}

impl KeypointRole {
    pub fn of(index: usize) -> Self {
        match index {
            THUMB_TIP | INDEX_TIP | MIDDLE_TIP | RING_TIP | PINKY_TIP => KeypointRole::Tip,
            WRIST | THUMB_CMC | INDEX_MCP | MIDDLE_MCP | RING_MCP | PINKY_MCP => KeypointRole::Palm,
            _ => KeypointRole::Joint,
        }
    }
}

// ============================================================================
// DATA STRUCTURE
// ============================================================================

/// A single 3D keypoint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, camera-relative
}

impl Keypoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_vector(v: Vector3<f32>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }

    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Screen-space projection (drops depth)
    pub fn xy(self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance in x, y, z
    pub fn distance(self, other: Keypoint) -> f32 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
