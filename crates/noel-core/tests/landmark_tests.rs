// Geometric predicates over single landmark frames.

use glam::Vec2;
use noel_core::landmarks::{Finger, LandmarkFrame, LANDMARK_COUNT, THUMB_TIP};
use noel_core::sim;
use noel_core::{classify, Gesture, FINGER_SEGMENT_MIN};

fn frame_with_index_segments(mcp_to_pip: f32, pip_to_tip: f32) -> LandmarkFrame {
    // Start from a fist so only the index finger's geometry matters.
    let base = sim::fist();
    let mut points: Vec<Vec2> = (0..LANDMARK_COUNT).map(|i| base.point(i)).collect();
    let mcp = Vec2::new(0.42, 0.70);
    points[Finger::Index.mcp()] = mcp;
    points[Finger::Index.pip()] = mcp - Vec2::new(0.0, mcp_to_pip);
    points[Finger::Index.tip()] = mcp - Vec2::new(0.0, mcp_to_pip + pip_to_tip);
    LandmarkFrame::from_points(&points).unwrap()
}

#[test]
fn from_points_rejects_wrong_count() {
    let too_few = vec![Vec2::ZERO; 20];
    assert!(LandmarkFrame::from_points(&too_few).is_err());
    let too_many = vec![Vec2::ZERO; 22];
    assert!(LandmarkFrame::from_points(&too_many).is_err());
    let exact = vec![Vec2::ZERO; LANDMARK_COUNT];
    assert!(LandmarkFrame::from_points(&exact).is_ok());
}

#[test]
fn extension_requires_both_segments_long() {
    let long = FINGER_SEGMENT_MIN + 0.02;
    let short = FINGER_SEGMENT_MIN - 0.02;

    let both_long = frame_with_index_segments(long, long);
    assert!(both_long.finger_extended(Finger::Index));

    let first_short = frame_with_index_segments(short, long);
    assert!(!first_short.finger_extended(Finger::Index));

    let second_short = frame_with_index_segments(long, short);
    assert!(!second_short.finger_extended(Finger::Index));
}

#[test]
fn extension_is_monotonic_in_segment_length() {
    // For a fixed long PIP->tip, sweep MCP->PIP upward: once the threshold
    // is crossed the classification flips to extended and stays there.
    let pip_to_tip = FINGER_SEGMENT_MIN + 0.04;
    let mut was_extended = false;
    for step in 0..40 {
        let mcp_to_pip = 0.02 + step as f32 * 0.005;
        let extended = frame_with_index_segments(mcp_to_pip, pip_to_tip)
            .finger_extended(Finger::Index);
        assert!(
            extended || !was_extended,
            "extended flipped back to false at segment length {mcp_to_pip}"
        );
        was_extended = extended;
    }
    assert!(was_extended, "sweep must end extended");
}

#[test]
fn extended_finger_counts_match_poses() {
    assert_eq!(sim::fist().extended_finger_count(), 0);
    assert_eq!(sim::open_hand().extended_finger_count(), 4);
    for n in 1..=3usize {
        assert_eq!(sim::partial_hand(n).extended_finger_count(), n);
    }
}

#[test]
fn pinch_requires_outer_fingers_extended() {
    assert!(sim::pinch().is_pinch());

    // Same thumb-on-index contact but with the outer fingers curled is an
    // OK-sign / fist hybrid, not a pinch.
    let base = sim::fist();
    let mut points: Vec<Vec2> = (0..LANDMARK_COUNT).map(|i| base.point(i)).collect();
    points[THUMB_TIP] = base.point(Finger::Index.tip()) + Vec2::new(0.01, 0.01);
    let ok_sign = LandmarkFrame::from_points(&points).unwrap();
    assert!(!ok_sign.is_pinch());
}

#[test]
fn classify_covers_all_gesture_shapes() {
    assert_eq!(classify(Some(&sim::pinch())), Gesture::Pinch);
    assert_eq!(classify(Some(&sim::fist())), Gesture::Fist);
    assert_eq!(classify(Some(&sim::open_hand())), Gesture::Open);
    assert_eq!(classify(Some(&sim::partial_hand(2))), Gesture::Other);
    assert_eq!(classify(None), Gesture::NoHand);
}

#[test]
fn palm_offset_maps_unit_square_to_signed_range() {
    let mut points = vec![Vec2::splat(0.5); LANDMARK_COUNT];
    points[9] = Vec2::new(0.0, 1.0);
    let frame = LandmarkFrame::from_points(&points).unwrap();
    let offset = frame.palm_offset();
    assert!((offset.x - -1.0).abs() < 1e-6);
    assert!((offset.y - 1.0).abs() < 1e-6);

    points[9] = Vec2::splat(0.5);
    let centered = LandmarkFrame::from_points(&points).unwrap();
    assert!(centered.palm_offset().length() < 1e-6);
}
