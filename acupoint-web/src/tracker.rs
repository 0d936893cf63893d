//! Hand tracker - stabilizer, orientation and target points in one call
//!
//! One `HandTracker` per camera stream. Feed it every detector result in
//! order; it owns all temporal state.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::acupoint::{resolve, AnatomicalPoint, TargetDebouncer, TargetName};
use crate::classifier::{Orientation, OrientationClassifier, OrientationConfig, OrientationDecision};
use crate::error::{Error, Result};
use crate::hand::{FrameSample, Handedness, StabilizedFrame};
use crate::stabilizer::{MotionState, StabilizationEngine, StabilizerConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub stabilizer: StabilizerConfig,
    pub orientation: OrientationConfig,
    /// Minimum |dx| or |dy| before a published target point moves.
    pub update_threshold: f32,
    /// Swap the detector's left/right label (front camera preview is mirrored).
    pub mirror_handedness: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            stabilizer: StabilizerConfig::default(),
            orientation: OrientationConfig::default(),
            update_threshold: 0.005,
            mirror_handedness: false,
        }
    }
}

impl TrackerConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.stabilizer.validate()?;
        self.orientation.validate()?;
        if !(self.update_threshold >= 0.0 && self.update_threshold.is_finite()) {
            return Err(Error::Config(format!(
                "update_threshold must be a non-negative number, got {}",
                self.update_threshold
            )));
        }
        Ok(())
    }
}

/// Everything known about the hand after one frame
#[derive(Clone, Debug, PartialEq)]
pub struct HandReading {
    pub frame: StabilizedFrame,
    pub decision: OrientationDecision,
    pub motion: MotionState,
    /// Detector label, mirrored when configured
    pub handedness: Handedness,
    /// One entry per known target, in `TargetName::ALL` order
    pub targets: Vec<AnatomicalPoint>,
}

impl HandReading {
    pub fn orientation(&self) -> Orientation {
        self.decision.orientation
    }

    /// Published position of `name`; `None` when hidden or unselected
    pub fn target(&self, name: TargetName) -> Option<Point2<f32>> {
        self.targets
            .iter()
            .find(|point| point.name == name)
            .and_then(|point| point.position)
    }

    pub fn visible_targets(&self) -> impl Iterator<Item = &AnatomicalPoint> {
        self.targets.iter().filter(|point| point.position.is_some())
    }
}

pub struct HandTracker {
    engine: StabilizationEngine,
    classifier: OrientationClassifier,
    debouncer: TargetDebouncer,
    selection: Vec<TargetName>,
    mirror_handedness: bool,
}

impl HandTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: StabilizationEngine::new(config.stabilizer)?,
            classifier: OrientationClassifier::new(config.orientation)?,
            debouncer: TargetDebouncer::new(config.update_threshold),
            selection: TargetName::ALL.to_vec(),
            mirror_handedness: config.mirror_handedness,
        })
    }

    /// Process one detector result (`None` = no hand in view).
    ///
    /// A target gets a position only when it is selected and lies on the side
    /// of the hand currently facing the camera.
    ///
    /// `None` resets the stabilizer and the published points but not the
    /// orientation lock: a hand returning within `lock_frames` calls keeps the
    /// locked label. Call `reset` to drop it.
    pub fn process(&mut self, sample: Option<FrameSample>) -> Option<HandReading> {
        let Some(frame) = self.engine.ingest(sample) else {
            self.debouncer.clear();
            return None;
        };

        let decision = self.classifier.evaluate(&frame);
        let selection = &self.selection;
        let debouncer = &mut self.debouncer;
        let targets = TargetName::ALL
            .into_iter()
            .map(|name| {
                let shown = selection.contains(&name) && name.side() == decision.orientation;
                let position = if shown { resolve(&frame, name) } else { None };
                AnatomicalPoint {
                    name,
                    position: debouncer.update(name, position),
                }
            })
            .collect();

        let handedness = if self.mirror_handedness {
            frame.handedness().mirrored()
        } else {
            frame.handedness()
        };

        Some(HandReading {
            motion: self.engine.motion_state(),
            handedness,
            decision,
            targets,
            frame,
        })
    }

    /// Forget everything (camera switch)
    pub fn reset(&mut self) {
        self.engine.reset();
        self.classifier.reset();
        self.debouncer.clear();
        tracing::debug!("hand tracker reset");
    }

    /// Choose which targets may be shown; duplicates are ignored
    pub fn set_selection<I>(&mut self, targets: I)
    where
        I: IntoIterator<Item = TargetName>,
    {
        self.selection.clear();
        for target in targets {
            if !self.selection.contains(&target) {
                self.selection.push(target);
            }
        }
    }

    pub fn selection(&self) -> &[TargetName] {
        &self.selection
    }

    pub fn set_mirror_handedness(&mut self, mirror: bool) {
        self.mirror_handedness = mirror;
    }

    pub fn motion_state(&self) -> MotionState {
        self.engine.motion_state()
    }

    pub fn engine(&self) -> &StabilizationEngine {
        &self.engine
    }

    pub fn classifier(&self) -> &OrientationClassifier {
        &self.classifier
    }
}

impl Default for HandTracker {
    fn default() -> Self {
        Self {
            engine: StabilizationEngine::default(),
            classifier: OrientationClassifier::default(),
            debouncer: TargetDebouncer::new(TrackerConfig::default().update_threshold),
            selection: TargetName::ALL.to_vec(),
            mirror_handedness: false,
        }
    }
}
