//! Error types for the tracking core.
//!
//! Only contract violations live here. A missing hand, a rejected noisy frame
//! or an ambiguous orientation are ordinary data, never errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::hand::KEYPOINT_COUNT;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Detector adapter produced a frame that is not a full hand.
    #[error("malformed frame: expected {} keypoints, found {found}", KEYPOINT_COUNT)]
    KeypointCount { found: usize },

    /// Flat buffer length is not 21 × 3 floats.
    #[error("malformed frame: expected {expected} floats, found {found}")]
    FlatLength { expected: usize, found: usize },

    /// NaN or infinite coordinate would poison every filter downstream.
    #[error("malformed frame: keypoint {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    #[error("unknown target code: {0}")]
    UnknownTarget(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
