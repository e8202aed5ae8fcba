//! Falling-snow particle buffer.
//!
//! Owned position/velocity arrays advanced once per render tick. Flakes that
//! leave the envelope respawn at the top or re-center, so the buffer length
//! never changes after construction.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    SNOW_DEFAULT_COUNT, SNOW_DEFAULT_SIZE, SNOW_DEFAULT_SPEED, SNOW_DRIFT_LIMIT, SNOW_KILL_HEIGHT,
    SNOW_RESPAWN_HEIGHT, SNOW_SPAWN_EXTENT, SNOW_SPAWN_FLOOR, SNOW_VELOCITY_SCALE,
};

#[derive(Clone, Copy, Debug)]
pub struct SnowConfig {
    pub count: usize,
    /// Base fall speed; each flake falls at 0.5..=1.0 of this.
    pub fall_speed: f32,
    /// Point-sprite size hint for the renderer; unused by the simulation.
    pub flake_size: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: SNOW_DEFAULT_COUNT,
            fall_speed: SNOW_DEFAULT_SPEED,
            flake_size: SNOW_DEFAULT_SIZE,
        }
    }
}

pub struct Snowfall {
    config: SnowConfig,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    rng: StdRng,
}

impl Snowfall {
    pub fn new(config: SnowConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(config.count);
        let mut velocities = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT,
                rng.gen::<f32>() * SNOW_SPAWN_EXTENT + SNOW_SPAWN_FLOOR,
                (rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT,
            ));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.1,
                -config.fall_speed * (0.5 + rng.gen::<f32>() * 0.5),
                (rng.gen::<f32>() - 0.5) * 0.1,
            ));
        }
        Self {
            config,
            positions,
            velocities,
            rng,
        }
    }

    pub fn config(&self) -> SnowConfig {
        self.config
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Integrate one tick. Velocities are stored in legacy per-frame units
    /// and scaled to per-second here.
    pub fn advance(&mut self, dt: f32) {
        for (pos, vel) in self.positions.iter_mut().zip(&self.velocities) {
            *pos += *vel * dt * SNOW_VELOCITY_SCALE;

            if pos.y < SNOW_KILL_HEIGHT {
                pos.x = (self.rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT;
                pos.y = SNOW_RESPAWN_HEIGHT;
                pos.z = (self.rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT;
            }
            if pos.x.abs() > SNOW_DRIFT_LIMIT {
                pos.x = (self.rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT;
            }
            if pos.z.abs() > SNOW_DRIFT_LIMIT {
                pos.z = (self.rng.gen::<f32>() - 0.5) * SNOW_SPAWN_EXTENT;
            }
        }
    }
}
