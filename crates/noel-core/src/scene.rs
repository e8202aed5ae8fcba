//! Scene orchestration: particle collection, gesture wiring, group rotation.
//!
//! Two external callbacks drive a [`SceneState`]:
//!
//! * the detector callback feeds landmark frames into [`SceneState::observe_hand`],
//! * the render tick calls [`SceneState::advance`] with the frame delta.
//!
//! Both run on one logical thread; most-recent-call-wins is the whole
//! coordination model. The scene owns every particle, the snow buffer, the
//! classifier, and the session RNG, so equal seeds give equal scenes.

use glam::{EulerRot, Mat4, Vec2, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::constants::{
    CAMERA_HEIGHT, DEFAULT_CAMERA_DISTANCE, DEFAULT_DECOR_COUNT, DEFAULT_DUST_COUNT,
    HAND_PITCH_RANGE, HAND_STEER_RATE, HAND_YAW_RANGE, IDLE_GROUP_YAW_RATE, TREE_GROUP_YAW_RATE,
    TREE_HEIGHT, TREE_PITCH_RECOVER_RATE, TREE_RADIUS,
};
use crate::gesture::{DisplayMode, GestureClassifier, ModeChange};
use crate::landmarks::LandmarkFrame;
use crate::particle::{Particle, ParticleId, ParticleInstance, ParticleKind, PlacementContext, StyleTag};
use crate::snow::{SnowConfig, Snowfall};

#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub decor_count: usize,
    pub dust_count: usize,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub camera_distance: f32,
    pub snow: SnowConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            decor_count: DEFAULT_DECOR_COUNT,
            dust_count: DEFAULT_DUST_COUNT,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            snow: SnowConfig::default(),
        }
    }
}

/// Observable outcome of one detector callback; frontends map these to cues
/// (a chime on mode change, a highlight on focus selection).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    ModeChanged { from: DisplayMode, to: DisplayMode },
    FocusChanged { target: Option<ParticleId> },
}

pub type SceneEvents = SmallVec<[SceneEvent; 2]>;

pub struct SceneState {
    config: SceneConfig,
    classifier: GestureClassifier,
    particles: Vec<Particle>,
    photo_wall: bool,
    focus: Option<ParticleId>,
    /// Whole-group rotation, x = pitch, y = yaw.
    rotation: Vec2,
    rng: StdRng,
    snow: Snowfall,
    started: Instant,
    next_id: ParticleId,
}

impl SceneState {
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        // Derive independent streams from the base seed so the snow buffer
        // and the particle spawner never perturb each other.
        let mix = |i: u64| seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);

        let mut scene = Self {
            config,
            classifier: GestureClassifier::new(),
            particles: Vec::with_capacity(config.decor_count + config.dust_count),
            photo_wall: false,
            focus: None,
            rotation: Vec2::ZERO,
            rng: StdRng::seed_from_u64(mix(1)),
            snow: Snowfall::new(config.snow, mix(2)),
            started: Instant::now(),
            next_id: 0,
        };

        for _ in 0..config.decor_count {
            let style = StyleTag::random_decor(&mut scene.rng);
            let base_scale = 0.4 + scene.rng.gen::<f32>() * 0.5;
            scene.spawn(ParticleKind::Decor, style, base_scale);
        }
        for _ in 0..config.dust_count {
            let base_scale = 0.5 + scene.rng.gen::<f32>();
            scene.spawn(ParticleKind::Dust, StyleTag::DustMote, base_scale);
        }
        scene
    }

    fn spawn(&mut self, kind: ParticleKind, style: StyleTag, base_scale: f32) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        let particle = Particle::new(
            id,
            kind,
            style,
            base_scale,
            self.config.tree_height,
            self.config.tree_radius,
            &mut self.rng,
        );
        self.particles.push(particle);
        id
    }

    /// Detector callback: feed one landmark frame (or its absence).
    ///
    /// Mode transitions committed by the classifier become events here; FOCUS
    /// entry additionally picks one photo uniformly at random. With no photos
    /// registered the mode still switches and the target stays unset.
    pub fn observe_hand(&mut self, frame: Option<&LandmarkFrame>) -> SceneEvents {
        let mut events = SceneEvents::new();
        let Some(ModeChange { from, to }) = self.classifier.update(frame) else {
            return events;
        };
        events.push(SceneEvent::ModeChanged { from, to });

        match to {
            DisplayMode::Focus => {
                let photos: Vec<ParticleId> = self
                    .particles
                    .iter()
                    .filter(|p| p.kind == ParticleKind::Photo)
                    .map(|p| p.id)
                    .collect();
                self.focus = if photos.is_empty() {
                    log::debug!("focus requested with no photos registered");
                    None
                } else {
                    Some(photos[self.rng.gen_range(0..photos.len())])
                };
                events.push(SceneEvent::FocusChanged { target: self.focus });
            }
            DisplayMode::Tree | DisplayMode::Scatter => {
                if self.focus.take().is_some() {
                    events.push(SceneEvent::FocusChanged { target: None });
                }
            }
        }
        events
    }

    /// Render-tick callback: ease the group rotation, advance the snow, and
    /// step every particle toward its current target.
    pub fn advance(&mut self, dt: f32) {
        self.step_group_rotation(dt);
        self.snow.advance(dt);

        let group = Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        let group_inverse = group.inverse();
        let camera_world = Vec3::new(0.0, CAMERA_HEIGHT, self.config.camera_distance);
        let ctx = PlacementContext {
            mode: self.classifier.mode(),
            photo_wall: self.photo_wall,
            focus: self.focus,
            camera_local: group_inverse.transform_point3(camera_world),
            group_inverse,
            time: self.started.elapsed().as_secs_f32(),
        };
        for particle in &mut self.particles {
            particle.step(&ctx, dt);
        }
    }

    /// Group rotation policy: hand-steered while scattered with a visible
    /// hand, a slow upright spin in TREE, an even slower drift otherwise.
    fn step_group_rotation(&mut self, dt: f32) {
        let hand = self.classifier.hand();
        let mode = self.classifier.mode();
        if mode == DisplayMode::Scatter && hand.detected {
            let target_yaw = hand.offset.x * std::f32::consts::PI * HAND_YAW_RANGE;
            let target_pitch = hand.offset.y * std::f32::consts::PI * HAND_PITCH_RANGE;
            self.rotation.y += (target_yaw - self.rotation.y) * HAND_STEER_RATE * dt;
            self.rotation.x += (target_pitch - self.rotation.x) * HAND_STEER_RATE * dt;
        } else if mode == DisplayMode::Tree {
            self.rotation.y += TREE_GROUP_YAW_RATE * dt;
            self.rotation.x += (0.0 - self.rotation.x) * TREE_PITCH_RECOVER_RATE * dt;
        } else {
            self.rotation.y += IDLE_GROUP_YAW_RATE * dt;
        }
    }

    /// Register a photo item. The whole gallery is relaid out because every
    /// slot's angle depends on the total count.
    pub fn add_photo(&mut self) -> ParticleId {
        let id = self.spawn(ParticleKind::Photo, StyleTag::PhotoFrame, 0.8);
        self.relayout_photo_wall();
        id
    }

    /// Remove a photo and relayout the survivors. Returns false when `id`
    /// does not name a photo.
    pub fn remove_photo(&mut self, id: ParticleId) -> bool {
        let before = self.particles.len();
        self.particles
            .retain(|p| !(p.kind == ParticleKind::Photo && p.id == id));
        if self.particles.len() == before {
            return false;
        }
        if self.focus == Some(id) {
            self.focus = None;
        }
        self.relayout_photo_wall();
        true
    }

    /// Toggle the circular gallery overlay. Enabling it also forces SCATTER
    /// so the wall is not buried inside the tree cone.
    pub fn set_photo_wall(&mut self, active: bool) {
        self.photo_wall = active;
        if active {
            self.relayout_photo_wall();
            self.classifier.set_mode(DisplayMode::Scatter);
        }
    }

    fn relayout_photo_wall(&mut self) {
        let total = self
            .particles
            .iter()
            .filter(|p| p.kind == ParticleKind::Photo)
            .count();
        if total == 0 {
            return;
        }
        let mut index = 0;
        for particle in &mut self.particles {
            if particle.kind == ParticleKind::Photo {
                particle.assign_wall_slot(index, total);
                index += 1;
            }
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.classifier.mode()
    }

    pub fn focus(&self) -> Option<ParticleId> {
        self.focus
    }

    pub fn photo_wall(&self) -> bool {
        self.photo_wall
    }

    pub fn group_rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn photo_count(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.kind == ParticleKind::Photo)
            .count()
    }

    pub fn snow(&self) -> &Snowfall {
        &self.snow
    }

    /// Renderer-ready instance records for every particle, in spawn order.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(Particle::instance).collect()
    }
}
