//! Palm/back classifier with a confidence-gated hysteresis lock

use super::config::OrientationConfig;
use super::features::{extract_signals, OrientationSignals};
use super::lock::OrientationLock;
use crate::error::Result;
use crate::hand::StabilizedFrame;

/// Which side of the hand faces the camera
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Palm,
    Back,
}

impl Orientation {
    /// Positive score is palm; zero and below is back
    pub fn from_score(score: i32) -> Self {
        if score > 0 {
            Orientation::Palm
        } else {
            Orientation::Back
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Palm => "palm",
            Orientation::Back => "back",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Orientation::Palm => Orientation::Back,
            Orientation::Back => Orientation::Palm,
        }
    }
}

/// Full result of one classification call
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationDecision {
    pub orientation: Orientation,
    /// Signals of this frame; `None` when the lock answered without scoring
    pub signals: Option<OrientationSignals>,
    /// Served from the hysteresis lock
    pub locked: bool,
}

impl OrientationDecision {
    pub fn score(&self) -> Option<i32> {
        self.signals.map(|s| s.score())
    }
}

/// Classifies stabilized frames as palm or back, one call per frame
pub struct OrientationClassifier {
    config: OrientationConfig,
    lock: OrientationLock,
}

impl OrientationClassifier {
    pub fn new(config: OrientationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            lock: OrientationLock::new(),
        })
    }

    pub fn classify(&mut self, frame: &StabilizedFrame) -> Orientation {
        self.evaluate(frame).orientation
    }

    /// Classify and report how the label was reached
    pub fn evaluate(&mut self, frame: &StabilizedFrame) -> OrientationDecision {
        if let Some(orientation) = self.lock.take() {
            return OrientationDecision {
                orientation,
                signals: None,
                locked: true,
            };
        }

        let signals = extract_signals(frame, &self.config);
        let score = signals.score();
        let orientation = Orientation::from_score(score);

        if score.abs() > self.config.confidence_threshold {
            self.lock.engage(orientation, self.config.lock_frames);
            tracing::debug!(
                orientation = orientation.as_str(),
                score,
                frames = self.config.lock_frames,
                "orientation locked"
            );
        }

        OrientationDecision {
            orientation,
            signals: Some(signals),
            locked: false,
        }
    }

    /// Drop the lock immediately (camera switch)
    pub fn reset(&mut self) {
        self.lock.clear();
    }

    pub fn lock(&self) -> &OrientationLock {
        &self.lock
    }

    pub fn config(&self) -> &OrientationConfig {
        &self.config
    }
}

impl Default for OrientationClassifier {
    fn default() -> Self {
        Self {
            config: OrientationConfig::default(),
            lock: OrientationLock::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{
        FrameSample, Handedness, Keypoint, KEYPOINT_COUNT, INDEX_MCP, INDEX_PIP, INDEX_TIP,
        MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, RING_MCP, RING_PIP, RING_TIP,
    };

    const FINGERS: [(usize, usize, usize); 3] = [
        (INDEX_MCP, INDEX_PIP, INDEX_TIP),
        (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
        (RING_MCP, RING_PIP, RING_TIP),
    ];

    fn hand(pip_z: f32, pip_y: f32, tip_y: f32) -> StabilizedFrame {
        let mut points = [Keypoint::new(0.5, 0.8, 0.0); KEYPOINT_COUNT];
        for (i, &(mcp, pip, tip)) in FINGERS.iter().enumerate() {
            let x = 0.4 + 0.1 * i as f32;
            points[mcp] = Keypoint::new(x, 0.6, 0.0);
            points[pip] = Keypoint::new(x, pip_y, pip_z);
            points[tip] = Keypoint::new(x, tip_y, pip_z);
        }
        FrameSample::new(points, Handedness::Left).unwrap().into()
    }

    /// Score +4
    fn palm() -> StabilizedFrame {
        hand(-0.05, 0.5, 0.3)
    }

    /// Score -3: depth and vertical say back, tips folded onto the PIPs
    fn back() -> StabilizedFrame {
        hand(0.05, 0.68, 0.7)
    }

    #[test]
    fn test_score_sign_maps_to_label() {
        assert_eq!(Orientation::from_score(1), Orientation::Palm);
        assert_eq!(Orientation::from_score(0), Orientation::Back);
        assert_eq!(Orientation::from_score(-3), Orientation::Back);
        assert_eq!(Orientation::Palm.opposite(), Orientation::Back);
    }

    #[test]
    fn test_five_palm_frames_lock_from_first() {
        let mut classifier = OrientationClassifier::default();
        let first = classifier.evaluate(&palm());
        assert_eq!(first.orientation, Orientation::Palm);
        assert_eq!(first.score(), Some(4));
        assert!(!first.locked);

        for _ in 2..=5 {
            let decision = classifier.evaluate(&palm());
            assert_eq!(decision.orientation, Orientation::Palm);
            assert!(decision.locked);
        }
    }

    #[test]
    fn test_flip_only_after_lock_expires() {
        let mut classifier = OrientationClassifier::default();
        let lock_frames = classifier.config().lock_frames;
        assert_eq!(classifier.classify(&palm()), Orientation::Palm);

        // Opposite input is ignored for the whole countdown
        for _ in 0..lock_frames {
            assert_eq!(classifier.classify(&back()), Orientation::Palm);
        }
        assert!(!classifier.lock().is_engaged());

        let decision = classifier.evaluate(&back());
        assert_eq!(decision.orientation, Orientation::Back);
        assert!(!decision.locked);
    }

    #[test]
    fn test_low_confidence_does_not_lock() {
        let mut classifier = OrientationClassifier::default();
        // depth +1 only: score 2 is not above the threshold
        let weak = hand(-0.05, 0.5, 0.555);
        let decision = classifier.evaluate(&weak);
        assert_eq!(decision.score(), Some(2));
        assert_eq!(decision.orientation, Orientation::Palm);
        assert!(!classifier.lock().is_engaged());

        assert_eq!(classifier.classify(&back()), Orientation::Back);
    }

    #[test]
    fn test_reset_clears_lock() {
        let mut classifier = OrientationClassifier::default();
        classifier.classify(&palm());
        assert!(classifier.lock().is_engaged());

        classifier.reset();
        assert!(!classifier.lock().is_engaged());
        assert_eq!(classifier.classify(&back()), Orientation::Back);
    }
}
