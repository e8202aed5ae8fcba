//! Hand-landmark frames and the per-frame geometric predicates built on them.
//!
//! A [`LandmarkFrame`] is one output cycle of an external hand detector: 21
//! joint coordinates normalized to \[0, 1\] in both axes, indexed by the
//! standard hand-landmark convention (wrist 0, thumb 1..4, then four joints
//! per finger). The detector itself is a black box; everything here is pure
//! geometry over its output.

use glam::Vec2;
use thiserror::Error;

use crate::constants::{FINGER_SEGMENT_MIN, PINCH_DISTANCE_MAX};

/// Joints reported per detected hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
/// Middle-finger MCP, used as the palm reference point for steering.
pub const PALM_CENTER: usize = 9;

/// The four non-thumb fingers, each knowing its joint indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Knuckle joint at the base of the finger.
    pub fn mcp(self) -> usize {
        match self {
            Finger::Index => 5,
            Finger::Middle => 9,
            Finger::Ring => 13,
            Finger::Pinky => 17,
        }
    }

    /// Middle joint of the finger.
    pub fn pip(self) -> usize {
        self.mcp() + 1
    }

    pub fn tip(self) -> usize {
        self.mcp() + 3
    }
}

#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("expected {LANDMARK_COUNT} landmark points, got {0}")]
    WrongPointCount(usize),
}

/// One detector frame: 21 normalized joint positions for a single hand.
#[derive(Clone, Debug)]
pub struct LandmarkFrame {
    points: [Vec2; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn from_points(points: &[Vec2]) -> Result<Self, LandmarkError> {
        let points: [Vec2; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongPointCount(points.len()))?;
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// A finger counts as extended only when both phalanx segments are long:
    /// MCP->PIP and PIP->tip each above the threshold. Checking both segments
    /// keeps a partially bent finger from reading as extended.
    pub fn finger_extended(&self, finger: Finger) -> bool {
        let mcp = self.points[finger.mcp()];
        let pip = self.points[finger.pip()];
        let tip = self.points[finger.tip()];
        mcp.distance(pip) > FINGER_SEGMENT_MIN && pip.distance(tip) > FINGER_SEGMENT_MIN
    }

    /// Number of extended fingers among index/middle/ring/pinky. The thumb is
    /// deliberately excluded; its landmarks behave too differently.
    pub fn extended_finger_count(&self) -> usize {
        Finger::ALL
            .iter()
            .filter(|f| self.finger_extended(**f))
            .count()
    }

    /// Pinch: thumb tip and index tip close together while middle, ring and
    /// pinky stay extended. Requiring the outer three fingers open separates
    /// a pinch from a fist or an OK-sign.
    pub fn is_pinch(&self) -> bool {
        let thumb_to_index = self.points[THUMB_TIP].distance(self.points[Finger::Index.tip()]);
        thumb_to_index < PINCH_DISTANCE_MAX
            && self.finger_extended(Finger::Middle)
            && self.finger_extended(Finger::Ring)
            && self.finger_extended(Finger::Pinky)
    }

    /// Palm reference point remapped from \[0, 1\] to \[-1, 1\] on both axes,
    /// used to steer the scene group while the hand is visible.
    pub fn palm_offset(&self) -> Vec2 {
        (self.points[PALM_CENTER] - Vec2::splat(0.5)) * 2.0
    }
}
