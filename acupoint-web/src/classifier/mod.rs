//! Classifier module - palm/back orientation
//!
//! Closed-form scoring over the stabilized skeleton, no model weights.

mod config;
mod features;
mod lock;
mod model;

pub use config::OrientationConfig;
pub use features::{extract_signals, OrientationSignals};
pub use lock::OrientationLock;
pub use model::{Orientation, OrientationClassifier, OrientationDecision};
