//! Acupoint targets and their geometric constructions
//!
//! Each target is defined once as a small construction over named keypoints.
//! Resolution is a pure function of the stabilized skeleton.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;

use super::geometry::{interpolate, midpoint};
use crate::classifier::Orientation;
use crate::error::Error;
use crate::hand::{
    Keypoint, StabilizedFrame, INDEX_MCP, MIDDLE_MCP, PINKY_MCP, RING_MCP, THUMB_IP, THUMB_MCP,
    WRIST,
};

/// Supported acupoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetName {
    /// LI4, back of hand, between 1st and 2nd metacarpals
    Hegu,
    /// LI5, back of hand, radial side of the wrist crease
    Yangxi,
    /// PC8, palm center between 2nd and 3rd metacarpals
    Laogong,
    /// HT8, palm between 4th and 5th metacarpals
    Shaofu,
}

impl TargetName {
    pub const ALL: [TargetName; 4] = [
        TargetName::Hegu,
        TargetName::Yangxi,
        TargetName::Laogong,
        TargetName::Shaofu,
    ];

    /// Meridian code, e.g. "LI4"
    pub fn code(&self) -> &'static str {
        match self {
            TargetName::Hegu => "LI4",
            TargetName::Yangxi => "LI5",
            TargetName::Laogong => "PC8",
            TargetName::Shaofu => "HT8",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TargetName::Hegu => "Hegu",
            TargetName::Yangxi => "Yangxi",
            TargetName::Laogong => "Laogong",
            TargetName::Shaofu => "Shaofu",
        }
    }

    /// Side of the hand the point is shown on
    pub fn side(&self) -> Orientation {
        match self {
            TargetName::Hegu | TargetName::Yangxi => Orientation::Back,
            TargetName::Laogong | TargetName::Shaofu => Orientation::Palm,
        }
    }

    fn construction(&self) -> Construction {
        match self {
            TargetName::Hegu => Construction::At(Anchor::Midpoint(INDEX_MCP, THUMB_IP)),
            TargetName::Yangxi => Construction::At(Anchor::Lerp(WRIST, THUMB_MCP, 0.25)),
            TargetName::Laogong => Construction::Average(
                Anchor::Lerp(MIDDLE_MCP, WRIST, 0.3),
                Anchor::Midpoint(INDEX_MCP, RING_MCP),
            ),
            TargetName::Shaofu => Construction::Toward {
                from: Anchor::Midpoint(PINKY_MCP, RING_MCP),
                to: WRIST,
                t: 0.25,
            },
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetName {
    type Err = Error;

    /// Accepts the code ("LI4") or the name ("hegu"), any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TargetName::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s) || t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTarget(s.to_string()))
    }
}

/// A point derived from one or two keypoints
#[derive(Clone, Copy, Debug)]
enum Anchor {
    Midpoint(usize, usize),
    Lerp(usize, usize, f32),
}

impl Anchor {
    fn locate(&self, points: &[Keypoint]) -> Option<Point2<f32>> {
        match *self {
            Anchor::Midpoint(a, b) => Some(midpoint(xy(points, a)?, xy(points, b)?)),
            Anchor::Lerp(a, b, t) => Some(interpolate(xy(points, a)?, xy(points, b)?, t)),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Construction {
    At(Anchor),
    /// Interpolate from a derived point toward a keypoint
    Toward { from: Anchor, to: usize, t: f32 },
    Average(Anchor, Anchor),
}

impl Construction {
    fn locate(&self, points: &[Keypoint]) -> Option<Point2<f32>> {
        match *self {
            Construction::At(anchor) => anchor.locate(points),
            Construction::Toward { from, to, t } => {
                Some(interpolate(from.locate(points)?, xy(points, to)?, t))
            }
            Construction::Average(a, b) => Some(midpoint(a.locate(points)?, b.locate(points)?)),
        }
    }
}

fn xy(points: &[Keypoint], index: usize) -> Option<Point2<f32>> {
    points.get(index).map(|k| k.xy())
}

/// A named target with its position, when available
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnatomicalPoint {
    pub name: TargetName,
    pub position: Option<Point2<f32>>,
}

/// Locate `target` on a stabilized frame
pub fn resolve(frame: &StabilizedFrame, target: TargetName) -> Option<Point2<f32>> {
    resolve_points(frame.keypoints(), target)
}

/// Locate `target` on any keypoint slice; `None` if a source index is missing
pub fn resolve_points(points: &[Keypoint], target: TargetName) -> Option<Point2<f32>> {
    target.construction().locate(points)
}
