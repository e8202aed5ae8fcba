//! Debounced gesture-to-mode state machine.
//!
//! Raw per-frame detections are noisy; a single dropped or misread frame must
//! not flip the display mode. The classifier therefore commits FOCUS only
//! after a pinch has been held for [`PINCH_CONFIRM_FRAMES`] consecutive
//! frames, while fist (0 extended fingers) and open hand (4+) commit
//! immediately. Extended-finger counts of 1..=3 are a deliberate dead zone.

use glam::Vec2;

use crate::constants::{OPEN_HAND_FINGERS, PINCH_CONFIRM_FRAMES};
use crate::landmarks::LandmarkFrame;

/// Exclusive display mode of the whole scene. The photo wall is an orthogonal
/// overlay held by the scene, not a fourth mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Tree,
    Scatter,
    Focus,
}

/// Discrete classification of a single landmark frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Pinch,
    Fist,
    Open,
    /// 1..=3 extended fingers without a pinch; intentionally ignored.
    Other,
    NoHand,
}

/// Classify one frame without any temporal context.
pub fn classify(frame: Option<&LandmarkFrame>) -> Gesture {
    let Some(frame) = frame else {
        return Gesture::NoHand;
    };
    if frame.is_pinch() {
        return Gesture::Pinch;
    }
    match frame.extended_finger_count() {
        0 => Gesture::Fist,
        n if n >= OPEN_HAND_FINGERS => Gesture::Open,
        _ => Gesture::Other,
    }
}

/// Emitted when the committed mode actually changes; no-op transitions are
/// suppressed so side effects (audio cues, focus selection) fire once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

/// Most recent hand observation, kept for scene steering.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandState {
    pub detected: bool,
    /// Palm position in \[-1, 1\]^2, valid while `detected`.
    pub offset: Vec2,
}

/// Finite-state machine over per-frame gestures.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    pinch_frames: u32,
    required_frames: u32,
    mode: DisplayMode,
    hand: HandState,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self {
            pinch_frames: 0,
            required_frames: PINCH_CONFIRM_FRAMES,
            mode: DisplayMode::Tree,
            hand: HandState::default(),
        }
    }

    /// Override the confirmation window (mainly for tests and tuning).
    pub fn with_required_frames(mut self, frames: u32) -> Self {
        self.required_frames = frames.max(1);
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn hand(&self) -> HandState {
        self.hand
    }

    /// Force a mode without emitting a change event. Used by overlay toggles
    /// that want a mode as a side effect rather than a gesture result.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Feed one detector frame (or its absence). Returns the committed mode
    /// transition, if any. An absent hand resets the pinch counter but never
    /// changes the mode.
    pub fn update(&mut self, frame: Option<&LandmarkFrame>) -> Option<ModeChange> {
        if let Some(frame) = frame {
            self.hand.detected = true;
            self.hand.offset = frame.palm_offset();
        } else {
            self.hand.detected = false;
        }

        match classify(frame) {
            Gesture::Pinch => {
                self.pinch_frames += 1;
                if self.pinch_frames >= self.required_frames {
                    return self.commit(DisplayMode::Focus);
                }
                None
            }
            Gesture::Fist => {
                self.pinch_frames = 0;
                self.commit(DisplayMode::Tree)
            }
            Gesture::Open => {
                self.pinch_frames = 0;
                self.commit(DisplayMode::Scatter)
            }
            Gesture::Other => {
                // Dead zone: reset the debounce but leave the mode alone.
                self.pinch_frames = 0;
                None
            }
            Gesture::NoHand => {
                self.pinch_frames = 0;
                None
            }
        }
    }

    fn commit(&mut self, to: DisplayMode) -> Option<ModeChange> {
        if self.mode == to {
            return None;
        }
        let change = ModeChange {
            from: self.mode,
            to,
        };
        self.mode = to;
        Some(change)
    }
}
