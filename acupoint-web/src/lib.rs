//! Acupoint Web - hand keypoint stabilization and acupoint overlay
//!
//! Takes per-frame 21-point hand detections (MediaPipe layout), removes jitter,
//! decides whether the palm or the back of the hand faces the camera, and
//! derives named acupoints from the stabilized skeleton.
//!
//! The core (`stabilizer`, `classifier`, `acupoint`, `tracker`) is plain Rust
//! with caller-owned state. `bridge` holds the wasm_bindgen entry points.

mod bridge;

pub mod acupoint;
pub mod classifier;
pub mod error;
pub mod hand;
pub mod stabilizer;
pub mod tracker;

use wasm_bindgen::prelude::*;

pub use bridge::HandTrackerHandle;
pub use error::{Error, Result};
pub use hand::{FrameSample, Handedness, Keypoint, StabilizedFrame};
pub use tracker::{HandReading, HandTracker, TrackerConfig};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
