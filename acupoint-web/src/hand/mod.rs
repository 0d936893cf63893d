//! Hand data model - keypoint topology and per-frame samples
//!
//! Re-exports only.

mod frame;
mod keypoint;

pub use frame::{FrameSample, Handedness, StabilizedFrame, FLAT_FRAME_LEN};
pub use keypoint::*;
