// Gesture thresholds and scene tuning constants shared by the classifier,
// the placement routines, and any frontend that renders the scene.

use glam::Vec3;

// Gesture detection (normalized landmark coordinates)
pub const PINCH_DISTANCE_MAX: f32 = 0.05; // thumb tip to index tip
pub const FINGER_SEGMENT_MIN: f32 = 0.08; // per-phalanx length for "extended"
pub const PINCH_CONFIRM_FRAMES: u32 = 8; // consecutive frames before FOCUS commits
pub const OPEN_HAND_FINGERS: usize = 4; // extended fingers (thumb excluded) for SCATTER

// Movement easing
pub const POSITION_LERP_RATE: f32 = 2.0;
pub const FOCUS_LERP_RATE: f32 = 5.0; // focused item converges faster
pub const SCALE_LERP_RATE: f32 = 4.0;

// Focus presentation
pub const FOCUS_WORLD_POINT: Vec3 = Vec3::new(0.0, 2.0, 35.0); // in front of the camera
pub const FOCUS_SCALE: f32 = 4.5; // focused item, absolute
pub const UNFOCUSED_SCALE_FACTOR: f32 = 0.8; // everything else, relative to base

// Tree spiral
pub const TREE_HEIGHT: f32 = 24.0;
pub const TREE_RADIUS: f32 = 8.0;
pub const TREE_HEIGHT_BIAS: f32 = 0.8; // power-law exponent toward the base
pub const TREE_SPIRAL_TURNS: f32 = 50.0; // multiplied by PI over full height
pub const TREE_RADIUS_FLOOR: f32 = 0.5;

// Scatter sphere radius bands
pub const SCATTER_RADIUS_MIN: f32 = 8.0;
pub const SCATTER_RADIUS_SPAN: f32 = 12.0;
pub const DUST_SCATTER_RADIUS_MIN: f32 = 12.0;
pub const DUST_SCATTER_RADIUS_SPAN: f32 = 20.0;

// Photo wall gallery
pub const PHOTO_WALL_RADIUS: f32 = 25.0;
pub const PHOTO_WALL_BASE_HEIGHT: f32 = -5.0;
pub const PHOTO_WALL_ROW_STEP: f32 = 3.0;
pub const PHOTO_WALL_ROWS: usize = 3;

// Per-axis tumble rates (half-magnitude each side of zero)
pub const DECOR_SPIN_MAGNITUDE: f32 = 2.0;
pub const PHOTO_SPIN_FACTOR: f32 = 0.15; // photos spin slower so images stay legible
pub const TREE_YAW_RATE: f32 = 0.5; // constant slow yaw in TREE mode

// Scale behavior
pub const SCATTER_PHOTO_SCALE_FACTOR: f32 = 2.5; // large preview
pub const DUST_PULSE_BASE: f32 = 0.8;
pub const DUST_PULSE_AMPLITUDE: f32 = 0.4;
pub const DUST_PULSE_RATE: f32 = 4.0; // radians per second

// Whole-group rotation easing
pub const HAND_STEER_RATE: f32 = 3.0;
pub const HAND_YAW_RANGE: f32 = 0.9; // fraction of PI mapped from hand x
pub const HAND_PITCH_RANGE: f32 = 0.25; // fraction of PI mapped from hand y
pub const TREE_GROUP_YAW_RATE: f32 = 0.3;
pub const TREE_PITCH_RECOVER_RATE: f32 = 2.0;
pub const IDLE_GROUP_YAW_RATE: f32 = 0.1;

// Scene defaults (mirror the shipped configuration)
pub const DEFAULT_DECOR_COUNT: usize = 1500;
pub const DEFAULT_DUST_COUNT: usize = 2500;
pub const DEFAULT_CAMERA_DISTANCE: f32 = 50.0;
pub const CAMERA_HEIGHT: f32 = 2.0;

// Snowfall envelope
pub const SNOW_DEFAULT_COUNT: usize = 2000;
pub const SNOW_DEFAULT_SPEED: f32 = 0.5;
pub const SNOW_DEFAULT_SIZE: f32 = 2.0;
pub const SNOW_SPAWN_EXTENT: f32 = 200.0; // x/z spawn width, y spawn span
pub const SNOW_SPAWN_FLOOR: f32 = 50.0; // y spawn offset
pub const SNOW_RESPAWN_HEIGHT: f32 = 250.0;
pub const SNOW_KILL_HEIGHT: f32 = -50.0;
pub const SNOW_DRIFT_LIMIT: f32 = 150.0; // |x| or |z| past this re-centers
pub const SNOW_VELOCITY_SCALE: f32 = 60.0; // legacy per-frame velocities, scaled by dt
