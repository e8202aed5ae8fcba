//! One-shot target-position generators for the three display layouts.
//!
//! These are sampled once per particle at creation (tree and scatter) or
//! recomputed for the whole photo set whenever it changes size (photo wall).

use glam::Vec3;
use rand::Rng;

use crate::constants::{
    DUST_SCATTER_RADIUS_MIN, DUST_SCATTER_RADIUS_SPAN, PHOTO_WALL_BASE_HEIGHT, PHOTO_WALL_RADIUS,
    PHOTO_WALL_ROWS, PHOTO_WALL_ROW_STEP, SCATTER_RADIUS_MIN, SCATTER_RADIUS_SPAN,
    TREE_HEIGHT_BIAS, TREE_RADIUS_FLOOR, TREE_SPIRAL_TURNS,
};

/// Sample a point on the dense conical spiral that forms the tree.
///
/// Height is power-law biased toward the base so the cone reads as full, the
/// radius tightens linearly toward the top, and the angle winds many turns
/// over the height plus per-item jitter so the spiral never shows as a
/// literal helix.
pub fn tree_position(rng: &mut impl Rng, height: f32, radius: f32) -> Vec3 {
    let half_height = height / 2.0;
    let t = rng.gen::<f32>().powf(TREE_HEIGHT_BIAS);
    let y = t * height - half_height;
    let r_max = (radius * (1.0 - t)).max(TREE_RADIUS_FLOOR);
    let angle = t * TREE_SPIRAL_TURNS * std::f32::consts::PI
        + rng.gen::<f32>() * std::f32::consts::PI;
    let r = r_max * (0.8 + rng.gen::<f32>() * 0.4);
    Vec3::new(angle.cos() * r, y, angle.sin() * r)
}

/// Sample a point uniformly distributed on a spherical shell band.
///
/// The polar angle uses the inverse-cosine transform so points do not cluster
/// at the poles. Dust gets a wider band than decorations and photos.
pub fn scatter_position(rng: &mut impl Rng, dust: bool) -> Vec3 {
    let r = if dust {
        DUST_SCATTER_RADIUS_MIN + rng.gen::<f32>() * DUST_SCATTER_RADIUS_SPAN
    } else {
        SCATTER_RADIUS_MIN + rng.gen::<f32>() * SCATTER_RADIUS_SPAN
    };
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Position of photo `index` out of `total` on the circular gallery.
///
/// Photos sit at equal angular spacing on a fixed-radius circle, with the
/// vertical position cycling through three height bands so the gallery forms
/// three rings. Every photo's slot depends on `total`, which is why the whole
/// set must be relaid out whenever the collection changes size.
pub fn photo_wall_position(index: usize, total: usize) -> Vec3 {
    debug_assert!(total > 0 && index < total);
    let angle = (index as f32 / total as f32) * std::f32::consts::TAU;
    let height = PHOTO_WALL_BASE_HEIGHT + (index % PHOTO_WALL_ROWS) as f32 * PHOTO_WALL_ROW_STEP;
    Vec3::new(
        angle.cos() * PHOTO_WALL_RADIUS,
        height,
        angle.sin() * PHOTO_WALL_RADIUS,
    )
}
