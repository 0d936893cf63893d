//! Acupoint module - anatomical target points on the stabilized hand
//!
//! Re-exports only.

mod debounce;
mod geometry;
mod targets;

pub use debounce::TargetDebouncer;
pub use geometry::{distance, interpolate, midpoint};
pub use targets::{resolve, resolve_points, AnatomicalPoint, TargetName};
