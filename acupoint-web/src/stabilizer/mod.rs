//! Stabilizer module - jitter suppression and glitch rejection
//!
//! Re-exports only. All logic in submodules.

mod blend;
mod config;
mod engine;
mod motion;
mod ring;

pub use blend::{blend_coordinate, clamp_displacement, weighted_average, Skeleton};
pub use config::StabilizerConfig;
pub use engine::StabilizationEngine;
pub use motion::{Displacement, MotionState, MotionTracker};
pub use ring::RingBuffer;
