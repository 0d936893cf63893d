//! Hand tracker handle exposed to JavaScript
//!
//! JS owns the handle and calls `ingest` once per MediaPipe result with the
//! flat Float32Array of 21 × (x, y, z), then reads the getters for drawing.

use wasm_bindgen::prelude::*;

use crate::acupoint::TargetName;
use crate::error::Error;
use crate::hand::{FrameSample, Handedness, HAND_SKELETON};
use crate::tracker::{HandReading, HandTracker, TrackerConfig};

#[wasm_bindgen]
pub struct HandTrackerHandle {
    tracker: HandTracker,
    reading: Option<HandReading>,
}

#[wasm_bindgen]
impl HandTrackerHandle {
    /// `config_json` may be partial; omitted fields take defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HandTrackerHandle, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => TrackerConfig::from_json(json)?,
            _ => TrackerConfig::default(),
        };
        Ok(Self {
            tracker: HandTracker::new(config)?,
            reading: None,
        })
    }

    /// Bone list for drawing the stabilized hand, as flat index pairs
    /// `[a0, b0, a1, b1, ...]` into the `stabilized()` keypoints
    pub fn skeleton() -> Vec<u32> {
        HAND_SKELETON
            .iter()
            .flat_map(|&(a, b)| [a as u32, b as u32])
            .collect()
    }

    /// Feed one detection. An empty array means no hand in view.
    ///
    /// Returns whether a reading is available. Any length other than 0 or 63
    /// is rejected and leaves the tracker untouched.
    pub fn ingest(&mut self, data: &[f32], handedness: &str) -> Result<bool, JsValue> {
        let sample = if data.is_empty() {
            None
        } else {
            match FrameSample::from_flat(data, Handedness::from_label(handedness)) {
                Ok(sample) => Some(sample),
                Err(err) => {
                    web_sys::console::warn_1(&format!("Dropping hand frame: {}", err).into());
                    return Err(err.into());
                }
            }
        };

        self.reading = self.tracker.process(sample);
        Ok(self.reading.is_some())
    }

    /// Stabilized keypoints as a flat array, or undefined with no hand
    pub fn stabilized(&self) -> Option<Vec<f32>> {
        self.reading.as_ref().map(|reading| reading.frame.to_flat())
    }

    /// "palm" or "back"
    pub fn orientation(&self) -> Option<String> {
        self.reading
            .as_ref()
            .map(|reading| reading.orientation().as_str().to_string())
    }

    pub fn handedness(&self) -> Option<String> {
        self.reading
            .as_ref()
            .map(|reading| reading.handedness.as_str().to_string())
    }

    /// "uninitialized", "moving" or "stationary"
    pub fn motion_state(&self) -> String {
        self.tracker.motion_state().as_str().to_string()
    }

    pub fn is_stationary(&self) -> bool {
        self.tracker.engine().is_stationary()
    }

    /// `[x, y]` of a target by code or name, undefined while hidden
    pub fn target(&self, code: &str) -> Result<Option<Vec<f32>>, JsValue> {
        let name: TargetName = code.parse()?;
        Ok(self
            .reading
            .as_ref()
            .and_then(|reading| reading.target(name))
            .map(|point| vec![point.x, point.y]))
    }

    /// Codes of the targets currently drawn
    pub fn visible_targets(&self) -> Vec<String> {
        self.reading
            .iter()
            .flat_map(|reading| reading.visible_targets())
            .map(|point| point.name.code().to_string())
            .collect()
    }

    /// Replace the target selection; unknown codes reject the whole call
    pub fn select_targets(&mut self, codes: Vec<String>) -> Result<(), JsValue> {
        let targets = codes
            .iter()
            .map(|code| code.parse::<TargetName>())
            .collect::<Result<Vec<_>, Error>>()?;
        self.tracker.set_selection(targets);
        Ok(())
    }

    /// Call on camera switch; `mirror` is true for the front camera
    pub fn reset(&mut self, mirror: Option<bool>) {
        if let Some(mirror) = mirror {
            self.tracker.set_mirror_handedness(mirror);
        }
        self.tracker.reset();
        self.reading = None;
    }
}
