//! Synthetic landmark frames for driving the classifier without a camera.
//!
//! Tests and the headless driver need repeatable hand poses; these builders
//! produce geometrically valid frames for the four interesting shapes. Joint
//! spacing is chosen well clear of the classification thresholds so the poses
//! stay unambiguous.

use glam::Vec2;

use crate::landmarks::{LandmarkFrame, LANDMARK_COUNT};

const EXTENDED_SEGMENT: f32 = 0.12; // comfortably above the 0.08 threshold
const CURLED_SEGMENT: f32 = 0.03; // comfortably below it
const FINGER_X: [f32; 4] = [0.42, 0.48, 0.54, 0.60]; // index..pinky columns
const MCP_Y: f32 = 0.70;

/// Build a frame with per-finger extension flags (index, middle, ring,
/// pinky). `pinch` moves the thumb tip onto the index tip.
pub fn hand_frame(fingers: [bool; 4], pinch: bool) -> LandmarkFrame {
    let mut points = [Vec2::ZERO; LANDMARK_COUNT];

    // Wrist and thumb chain (thumb joints never count as a finger here).
    points[0] = Vec2::new(0.50, 0.95);
    points[1] = Vec2::new(0.38, 0.88);
    points[2] = Vec2::new(0.35, 0.82);
    points[3] = Vec2::new(0.32, 0.76);

    for (slot, &extended) in fingers.iter().enumerate() {
        let base = 5 + slot * 4;
        let x = FINGER_X[slot];
        let seg = if extended {
            EXTENDED_SEGMENT
        } else {
            CURLED_SEGMENT
        };
        points[base] = Vec2::new(x, MCP_Y);
        points[base + 1] = Vec2::new(x, MCP_Y - seg);
        points[base + 2] = Vec2::new(x, MCP_Y - seg * 1.6);
        points[base + 3] = Vec2::new(x, MCP_Y - seg * 2.0);
    }

    let index_tip = points[8];
    points[4] = if pinch {
        // Just off the index tip, well inside the pinch radius.
        index_tip + Vec2::new(0.012, 0.008)
    } else {
        Vec2::new(0.28, 0.70)
    };

    LandmarkFrame::from_points(&points).expect("builder always emits 21 points")
}

/// Pinch pose: thumb on a curled index tip, outer three fingers extended.
pub fn pinch() -> LandmarkFrame {
    hand_frame([false, true, true, true], true)
}

/// Closed fist: nothing extended.
pub fn fist() -> LandmarkFrame {
    hand_frame([false, false, false, false], false)
}

/// Open hand: all four fingers extended, thumb away from the index tip.
pub fn open_hand() -> LandmarkFrame {
    hand_frame([true, true, true, true], false)
}

/// A dead-zone pose with exactly `count` (1..=3) fingers extended.
pub fn partial_hand(count: usize) -> LandmarkFrame {
    let mut fingers = [false; 4];
    for flag in fingers.iter_mut().take(count.min(3)) {
        *flag = true;
    }
    hand_frame(fingers, false)
}
