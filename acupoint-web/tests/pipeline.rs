use acupoint_web::acupoint::TargetName;
use acupoint_web::classifier::{Orientation, OrientationClassifier};
use acupoint_web::hand::{FrameSample, Handedness, Keypoint, KEYPOINT_COUNT, FLAT_FRAME_LEN};
use acupoint_web::stabilizer::{Displacement, MotionState, StabilizationEngine};
use acupoint_web::{Error, HandTracker, HandTrackerHandle};
use pretty_assertions::assert_eq;

/// Synthetic open hand. `toward` < 0 puts the fingers nearer the camera
/// than the wrist (palm facing), > 0 away from it.
fn hand(dx: f32, toward: f32) -> FrameSample {
    let keypoints: [Keypoint; KEYPOINT_COUNT] = std::array::from_fn(|i| {
        if i == 0 {
            return Keypoint::new(0.5 + dx, 0.9, 0.0);
        }
        let finger = (i - 1) / 4;
        let joint = (i - 1) % 4;
        let y = if toward < 0.0 {
            0.7 - 0.1 * joint as f32
        } else {
            0.5 + 0.1 * joint as f32
        };
        Keypoint::new(0.3 + 0.1 * finger as f32 + dx, y, toward * (joint + 1) as f32)
    });
    FrameSample::new(keypoints, Handedness::Right).unwrap()
}

fn palm(dx: f32) -> FrameSample {
    hand(dx, -0.02)
}

fn back(dx: f32) -> FrameSample {
    hand(dx, 0.02)
}

#[test]
fn five_identical_palm_frames_stay_locked() {
    let mut engine = StabilizationEngine::default();
    let mut classifier = OrientationClassifier::default();

    let mut labels = Vec::new();
    let mut locked = Vec::new();
    for _ in 0..5 {
        let frame = engine.ingest(Some(palm(0.0))).unwrap();
        let decision = classifier.evaluate(&frame);
        labels.push(decision.orientation);
        locked.push(decision.locked);
    }

    assert_eq!(labels, vec![Orientation::Palm; 5]);
    assert_eq!(locked, vec![false, true, true, true, true]);
}

#[test]
fn absent_frame_then_fresh_bootstrap() {
    let mut engine = StabilizationEngine::default();
    for step in 0..4 {
        engine.ingest(Some(palm(0.01 * step as f32)));
    }

    assert!(engine.ingest(None).is_none());
    assert_eq!(engine.motion_state(), MotionState::Uninitialized);

    let next = palm(0.3);
    let out = engine.ingest(Some(next.clone())).unwrap();
    assert_eq!(out.keypoints(), next.keypoints());
}

#[test]
fn consecutive_outputs_respect_ceiling() {
    let mut engine = StabilizationEngine::default();
    let ceiling = engine.config().velocity_ceiling;
    let mut previous = engine.ingest(Some(palm(0.0))).unwrap();

    let offsets = [0.1, 0.0, 0.12, 0.24, 0.1, 0.149, 0.0, 0.05, 0.5, 0.13];
    for dx in offsets {
        let out = engine.ingest(Some(palm(dx))).unwrap();
        let step = Displacement::between(previous.keypoints(), out.keypoints());
        assert!(step.max <= ceiling + 1e-6, "step {} above ceiling", step.max);
        previous = out;
    }
}

#[test]
fn tracker_switches_visible_targets_with_orientation() {
    let mut tracker = HandTracker::default();
    let lock_frames = tracker.classifier().config().lock_frames;

    let reading = tracker.process(Some(palm(0.0))).unwrap();
    let visible: Vec<_> = reading.visible_targets().map(|p| p.name).collect();
    assert_eq!(visible, vec![TargetName::Laogong, TargetName::Shaofu]);

    // Camera switch drops the lock; the back-facing hand is picked up at once
    tracker.reset();
    let reading = tracker.process(Some(back(0.0))).unwrap();
    assert_eq!(reading.orientation(), Orientation::Back);
    let visible: Vec<_> = reading.visible_targets().map(|p| p.name).collect();
    assert_eq!(visible, vec![TargetName::Hegu, TargetName::Yangxi]);

    // Palm targets stay hidden while the back keeps facing the camera
    for _ in 0..lock_frames {
        let reading = tracker.process(Some(back(0.0))).unwrap();
        assert_eq!(reading.orientation(), Orientation::Back);
        assert!(reading.target(TargetName::Laogong).is_none());
    }
}

#[test]
fn malformed_input_is_an_error_not_a_missing_hand() {
    let short = vec![0.5_f32; FLAT_FRAME_LEN - 3];
    assert_eq!(
        FrameSample::from_flat(&short, Handedness::Left).unwrap_err(),
        Error::FlatLength {
            expected: FLAT_FRAME_LEN,
            found: FLAT_FRAME_LEN - 3
        }
    );

    let twenty = [Keypoint::default(); 20];
    assert_eq!(
        FrameSample::from_slice(&twenty, Handedness::Left).unwrap_err(),
        Error::KeypointCount { found: 20 }
    );
}

#[test]
fn fast_swipe_then_hold_catches_up() {
    let mut engine = StabilizationEngine::default();
    let ceiling = engine.config().velocity_ceiling;
    let dead_zone = engine.config().dead_zone;
    let mut previous = engine.ingest(Some(palm(0.0))).unwrap();

    // Each swipe step alone is past the ceiling
    let swipe = (1..=3).map(|step| palm(0.16 * step as f32));
    let hold = std::iter::repeat(palm(0.48)).take(300);
    for sample in swipe.chain(hold) {
        let out = engine.ingest(Some(sample)).unwrap();
        assert!(Displacement::between(previous.keypoints(), out.keypoints()).max <= ceiling + 1e-6);
        previous = out;
    }

    assert_eq!(engine.motion_state(), MotionState::Stationary);
    let gap = Displacement::between(previous.keypoints(), palm(0.48).keypoints());
    assert!(gap.max <= dead_zone * 3.0_f32.sqrt() + 1e-6, "gap {}", gap.max);
}

#[test]
fn skeleton_pairs_index_stabilized_keypoints() {
    let bones = HandTrackerHandle::skeleton();
    assert_eq!(bones.len() % 2, 0);
    assert!(bones.iter().all(|&i| (i as usize) < KEYPOINT_COUNT));
    // Wrist to thumb base comes first
    assert_eq!(&bones[..2], &[0, 1]);
}
