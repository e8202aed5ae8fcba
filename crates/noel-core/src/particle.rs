//! Per-item placement: target selection, easing, rotation and scale policy.
//!
//! Every particle carries precomputed target positions for each layout and
//! eases toward whichever one the current mode selects. Nothing here snaps
//! except billboard orientation; positions and scales always converge via
//! exponential smoothing so mode changes read as motion, not cuts.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

use crate::constants::{
    DECOR_SPIN_MAGNITUDE, DUST_PULSE_AMPLITUDE, DUST_PULSE_BASE, DUST_PULSE_RATE, FOCUS_LERP_RATE,
    FOCUS_SCALE, FOCUS_WORLD_POINT, PHOTO_SPIN_FACTOR, POSITION_LERP_RATE, SCALE_LERP_RATE,
    SCATTER_PHOTO_SCALE_FACTOR, TREE_YAW_RATE, UNFOCUSED_SCALE_FACTOR,
};
use crate::gesture::DisplayMode;
use crate::layout;

/// Stable handle for a particle within its scene.
pub type ParticleId = usize;

/// Behavioral category. Cosmetic variety (box vs bauble vs cane) lives in
/// [`StyleTag`] and never influences placement beyond what this enum encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Decor,
    Photo,
    Dust,
}

/// Opaque rendering hint; the renderer maps it to geometry and material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTag {
    GreenBox,
    GoldBox,
    GoldSphere,
    RedBauble,
    CandyCane,
    PhotoFrame,
    DustMote,
}

impl StyleTag {
    /// Draw a decoration style with the shipped frequency mix: mostly boxes
    /// and gold spheres, a few red baubles, the occasional candy cane.
    pub fn random_decor(rng: &mut impl Rng) -> Self {
        let roll = rng.gen::<f32>();
        if roll < 0.40 {
            StyleTag::GreenBox
        } else if roll < 0.70 {
            StyleTag::GoldBox
        } else if roll < 0.92 {
            StyleTag::GoldSphere
        } else if roll < 0.97 {
            StyleTag::RedBauble
        } else {
            StyleTag::CandyCane
        }
    }

    pub fn index(self) -> u32 {
        match self {
            StyleTag::GreenBox => 0,
            StyleTag::GoldBox => 1,
            StyleTag::GoldSphere => 2,
            StyleTag::RedBauble => 3,
            StyleTag::CandyCane => 4,
            StyleTag::PhotoFrame => 5,
            StyleTag::DustMote => 6,
        }
    }
}

/// Everything a single placement step needs from the surrounding scene.
#[derive(Clone, Copy, Debug)]
pub struct PlacementContext {
    pub mode: DisplayMode,
    pub photo_wall: bool,
    pub focus: Option<ParticleId>,
    /// Camera position already pulled into the particle group's local space.
    pub camera_local: Vec3,
    /// Inverse of the group's world transform, for the focus target point.
    pub group_inverse: Mat4,
    /// Session time in seconds, drives the dust pulse.
    pub time: f32,
}

impl PlacementContext {
    fn is_focused(&self, id: ParticleId) -> bool {
        self.mode == DisplayMode::Focus && self.focus == Some(id)
    }
}

/// Renderer-ready instance record: packed model matrix plus style selector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    pub model: [[f32; 4]; 4],
    pub style: u32,
    pub _pad: [u32; 3],
}

/// One decorative mesh, photo frame, or dust mote.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub style: StyleTag,

    pub position: Vec3,
    /// Euler angles (applied YXZ: yaw, then pitch, then roll).
    pub rotation: Vec3,
    pub scale: f32,

    pub pos_tree: Vec3,
    pub pos_scatter: Vec3,
    pub pos_photo_wall: Vec3,

    pub base_scale: f32,
    /// Per-axis tumble rate used in SCATTER, fixed at spawn.
    pub spin: Vec3,
    pulse_phase: f32,
}

impl Particle {
    pub fn new(
        id: ParticleId,
        kind: ParticleKind,
        style: StyleTag,
        base_scale: f32,
        tree_height: f32,
        tree_radius: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let spin_magnitude = match kind {
            ParticleKind::Photo => DECOR_SPIN_MAGNITUDE * PHOTO_SPIN_FACTOR,
            _ => DECOR_SPIN_MAGNITUDE,
        };
        let mut spin_axis = || (rng.gen::<f32>() - 0.5) * spin_magnitude;
        let spin = Vec3::new(spin_axis(), spin_axis(), spin_axis());

        let pos_tree = layout::tree_position(rng, tree_height, tree_radius);
        let pos_scatter = layout::scatter_position(rng, kind == ParticleKind::Dust);

        Self {
            id,
            kind,
            style,
            position: pos_tree,
            rotation: Vec3::new(
                rng.gen::<f32>() * std::f32::consts::TAU,
                rng.gen::<f32>() * std::f32::consts::TAU,
                rng.gen::<f32>() * std::f32::consts::TAU,
            ),
            scale: base_scale,
            pos_tree,
            pos_scatter,
            // Non-photos keep their scatter slot when the wall is up.
            pos_photo_wall: pos_scatter,
            base_scale,
            spin,
            pulse_phase: rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }

    /// Reassign this photo's gallery slot. Called for every photo whenever
    /// the collection changes size; a no-op for other kinds.
    pub fn assign_wall_slot(&mut self, index: usize, total: usize) {
        if self.kind != ParticleKind::Photo {
            return;
        }
        self.pos_photo_wall = layout::photo_wall_position(index, total);
    }

    /// Advance this particle's transform by one frame.
    pub fn step(&mut self, ctx: &PlacementContext, dt: f32) {
        let focused = ctx.is_focused(self.id);
        let target = self.select_target(ctx);

        let lerp_rate = if focused {
            FOCUS_LERP_RATE
        } else {
            POSITION_LERP_RATE
        };
        self.position += (target - self.position) * (lerp_rate * dt);

        self.step_rotation(ctx, focused, dt);
        self.step_scale(ctx, focused, dt);
    }

    fn select_target(&self, ctx: &PlacementContext) -> Vec3 {
        if ctx.mode == DisplayMode::Scatter {
            return self.pos_scatter;
        }
        if ctx.photo_wall && self.kind == ParticleKind::Photo {
            return self.pos_photo_wall;
        }
        match ctx.mode {
            DisplayMode::Focus => {
                if ctx.focus == Some(self.id) {
                    ctx.group_inverse.transform_point3(FOCUS_WORLD_POINT)
                } else {
                    self.pos_scatter
                }
            }
            _ => self.pos_tree,
        }
    }

    fn step_rotation(&mut self, ctx: &PlacementContext, focused: bool, dt: f32) {
        if ctx.photo_wall && self.kind == ParticleKind::Photo {
            // Gallery photos face the viewer, flipped half a turn so the
            // image side points outward.
            let mut facing = look_toward(self.position, ctx.camera_local);
            facing.y += std::f32::consts::PI;
            self.rotation = facing;
        } else if ctx.mode == DisplayMode::Scatter {
            self.rotation += self.spin * dt;
        } else if ctx.mode == DisplayMode::Tree {
            // Ease pitch and roll back upright, keep a slow steady yaw.
            self.rotation.x += (0.0 - self.rotation.x) * dt;
            self.rotation.z += (0.0 - self.rotation.z) * dt;
            self.rotation.y += TREE_YAW_RATE * dt;
        }

        if focused {
            self.rotation = look_toward(self.position, ctx.camera_local);
        }
    }

    fn step_scale(&mut self, ctx: &PlacementContext, focused: bool, dt: f32) {
        let mut target = self.base_scale;
        if self.kind == ParticleKind::Dust {
            target = self.base_scale
                * (DUST_PULSE_BASE
                    + DUST_PULSE_AMPLITUDE * (ctx.time * DUST_PULSE_RATE + self.pulse_phase).sin());
            if ctx.mode == DisplayMode::Tree {
                // Dust is only visible when the scene is scattered.
                target = 0.0;
            }
        } else if ctx.mode == DisplayMode::Scatter && self.kind == ParticleKind::Photo {
            target = self.base_scale * SCATTER_PHOTO_SCALE_FACTOR;
        } else if ctx.mode == DisplayMode::Focus {
            target = if focused {
                FOCUS_SCALE
            } else {
                self.base_scale * UNFOCUSED_SCALE_FACTOR
            };
        }
        self.scale += (target - self.scale) * (SCALE_LERP_RATE * dt);
    }

    /// Pack the current transform for renderer upload.
    pub fn instance(&self) -> ParticleInstance {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        let model =
            Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position);
        ParticleInstance {
            model: model.to_cols_array_2d(),
            style: self.style.index(),
            _pad: [0; 3],
        }
    }
}

/// Euler angles (YXZ) that point a particle's +Z face from `from` at `to`.
fn look_toward(from: Vec3, to: Vec3) -> Vec3 {
    let dir = to - from;
    let len = dir.length();
    if len < 1e-6 {
        return Vec3::ZERO;
    }
    let yaw = dir.x.atan2(dir.z);
    let pitch = (-dir.y / len).asin();
    Vec3::new(pitch, yaw, 0.0)
}
