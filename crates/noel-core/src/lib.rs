//! Core logic for a gesture-driven holiday-tree particle scene.
//!
//! These types avoid referencing platform APIs and are suitable for both
//! native and web targets. A frontend supplies landmark frames from whatever
//! hand detector it embeds and reads back per-particle transforms each frame;
//! everything in between — gesture debouncing, mode transitions, layout
//! targets, easing, snow — lives here and is host-testable.

pub mod constants;
pub mod gesture;
pub mod landmarks;
pub mod layout;
pub mod particle;
pub mod scene;
pub mod sim;
pub mod snow;

pub use constants::*;
pub use gesture::*;
pub use landmarks::{Finger, LandmarkError, LandmarkFrame, LANDMARK_COUNT};
pub use particle::*;
pub use scene::*;
pub use snow::*;
