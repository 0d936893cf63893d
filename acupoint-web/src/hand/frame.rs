//! Per-frame hand samples
//!
//! A `FrameSample` always holds exactly 21 keypoints; "no hand" is expressed
//! as `Option::None` by callers, never as a short frame.

use super::keypoint::{Keypoint, KEYPOINT_COUNT};
use crate::error::{Error, Result};

/// Floats per frame in the flat JS layout (21 keypoints × x, y, z)
pub const FLAT_FRAME_LEN: usize = KEYPOINT_COUNT * 3;

/// Detector's handedness label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Handedness {
    /// Parse MediaPipe's category name ("Left" / "Right")
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            l if l.eq_ignore_ascii_case("left") => Handedness::Left,
            l if l.eq_ignore_ascii_case("right") => Handedness::Right,
            _ => Handedness::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
            Handedness::Unknown => "unknown",
        }
    }

    /// Swap sides for a mirrored (front) camera preview
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
            Handedness::Unknown => Handedness::Unknown,
        }
    }
}

/// One raw detection: 21 keypoints plus handedness
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSample {
    keypoints: [Keypoint; KEYPOINT_COUNT],
    handedness: Handedness,
}

impl FrameSample {
    /// Build from an exact 21-keypoint array. Fails on non-finite coordinates.
    pub fn new(keypoints: [Keypoint; KEYPOINT_COUNT], handedness: Handedness) -> Result<Self> {
        if let Some(index) = keypoints.iter().position(|k| !k.is_finite()) {
            return Err(Error::NonFinite { index });
        }
        Ok(Self { keypoints, handedness })
    }

    /// Build from a detector-produced slice, which must hold exactly 21 points.
    pub fn from_slice(keypoints: &[Keypoint], handedness: Handedness) -> Result<Self> {
        let keypoints: [Keypoint; KEYPOINT_COUNT] = keypoints
            .try_into()
            .map_err(|_| Error::KeypointCount { found: keypoints.len() })?;
        Self::new(keypoints, handedness)
    }

    /// Parse the flat JS layout: [x0, y0, z0, x1, y1, z1, ...] (63 floats)
    pub fn from_flat(data: &[f32], handedness: Handedness) -> Result<Self> {
        if data.len() != FLAT_FRAME_LEN {
            return Err(Error::FlatLength {
                expected: FLAT_FRAME_LEN,
                found: data.len(),
            });
        }

        let mut keypoints = [Keypoint::default(); KEYPOINT_COUNT];
        for (keypoint, xyz) in keypoints.iter_mut().zip(data.chunks_exact(3)) {
            *keypoint = Keypoint::new(xyz[0], xyz[1], xyz[2]);
        }
        Self::new(keypoints, handedness)
    }

    pub fn keypoints(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.keypoints
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }
}

/// Filtered output of the stabilization engine
#[derive(Clone, Debug, PartialEq)]
pub struct StabilizedFrame {
    keypoints: [Keypoint; KEYPOINT_COUNT],
    handedness: Handedness,
}

impl StabilizedFrame {
    pub(crate) fn new(keypoints: [Keypoint; KEYPOINT_COUNT], handedness: Handedness) -> Self {
        Self { keypoints, handedness }
    }

    pub fn keypoints(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.keypoints
    }

    pub fn get(&self, index: usize) -> Option<Keypoint> {
        self.keypoints.get(index).copied()
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Flat [x, y, z] layout for JS
    pub fn to_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(FLAT_FRAME_LEN);
        for k in &self.keypoints {
            result.extend_from_slice(&[k.x, k.y, k.z]);
        }
        result
    }
}

impl From<FrameSample> for StabilizedFrame {
    /// Bootstrap path: a sample accepted without smoothing
    fn from(sample: FrameSample) -> Self {
        Self::new(sample.keypoints, sample.handedness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand() -> Vec<f32> {
        (0..FLAT_FRAME_LEN).map(|i| i as f32 / 64.0).collect()
    }

    #[test]
    fn test_from_flat_orders_xyz() {
        let sample = FrameSample::from_flat(&flat_hand(), Handedness::Right).unwrap();
        assert_eq!(sample.keypoints()[1], Keypoint::new(3.0 / 64.0, 4.0 / 64.0, 5.0 / 64.0));
        assert_eq!(sample.handedness(), Handedness::Right);
    }

    #[test]
    fn test_short_flat_buffer_is_malformed() {
        let err = FrameSample::from_flat(&[0.5; 60], Handedness::Left).unwrap_err();
        assert_eq!(err, Error::FlatLength { expected: 63, found: 60 });
    }

    #[test]
    fn test_wrong_keypoint_count_is_malformed() {
        let points = vec![Keypoint::default(); 20];
        let err = FrameSample::from_slice(&points, Handedness::Unknown).unwrap_err();
        assert_eq!(err, Error::KeypointCount { found: 20 });
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut data = flat_hand();
        data[3 * 7 + 1] = f32::NAN;
        let err = FrameSample::from_flat(&data, Handedness::Left).unwrap_err();
        assert_eq!(err, Error::NonFinite { index: 7 });
    }

    #[test]
    fn test_handedness_labels() {
        assert_eq!(Handedness::from_label("Left"), Handedness::Left);
        assert_eq!(Handedness::from_label(" RIGHT "), Handedness::Right);
        assert_eq!(Handedness::from_label("?"), Handedness::Unknown);
        assert_eq!(Handedness::Left.mirrored(), Handedness::Right);
    }

    #[test]
    fn test_flat_round_trip_through_stabilized() {
        let data = flat_hand();
        let frame: StabilizedFrame = FrameSample::from_flat(&data, Handedness::Left).unwrap().into();
        assert_eq!(frame.to_flat(), data);
    }
}
