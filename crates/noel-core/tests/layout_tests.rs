// Target-position generators: spiral, sphere band, circular gallery.

use noel_core::layout::{photo_wall_position, scatter_position, tree_position};
use noel_core::{
    DUST_SCATTER_RADIUS_MIN, DUST_SCATTER_RADIUS_SPAN, PHOTO_WALL_BASE_HEIGHT, PHOTO_WALL_RADIUS,
    PHOTO_WALL_ROW_STEP, SCATTER_RADIUS_MIN, SCATTER_RADIUS_SPAN, TREE_HEIGHT, TREE_RADIUS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn tree_positions_stay_inside_the_cone_envelope() {
    let mut rng = StdRng::seed_from_u64(7);
    let half = TREE_HEIGHT / 2.0;
    for _ in 0..2000 {
        let p = tree_position(&mut rng, TREE_HEIGHT, TREE_RADIUS);
        assert!(p.y >= -half - 1e-4 && p.y <= half + 1e-4, "height out of range: {}", p.y);

        let radial = (p.x * p.x + p.z * p.z).sqrt();
        let t = (p.y + half) / TREE_HEIGHT;
        let r_max = (TREE_RADIUS * (1.0 - t)).max(0.5);
        assert!(
            radial <= r_max * 1.2 + 1e-4,
            "radius {radial} exceeds band at height fraction {t}"
        );
        assert!(radial >= r_max * 0.8 - 1e-4);
    }
}

#[test]
fn tree_heights_bias_toward_the_base() {
    let mut rng = StdRng::seed_from_u64(11);
    let half = TREE_HEIGHT / 2.0;
    let n = 4000;
    let below_mid = (0..n)
        .filter(|_| tree_position(&mut rng, TREE_HEIGHT, TREE_RADIUS).y < 0.0)
        .count();
    // t = u^0.8 puts P(y < 0) at 0.5^1.25 ~ 0.42, not 0.5. Bounds are loose
    // enough to be stable across seeds.
    let fraction = below_mid as f32 / n as f32;
    assert!(
        fraction > 0.34 && fraction < 0.48,
        "expected ~0.42 of samples below mid height {half}, got {fraction}"
    );
}

#[test]
fn scatter_positions_respect_kind_radius_bands() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..2000 {
        let decor = scatter_position(&mut rng, false).length();
        assert!(decor >= SCATTER_RADIUS_MIN - 1e-4);
        assert!(decor <= SCATTER_RADIUS_MIN + SCATTER_RADIUS_SPAN + 1e-4);

        let dust = scatter_position(&mut rng, true).length();
        assert!(dust >= DUST_SCATTER_RADIUS_MIN - 1e-4);
        assert!(dust <= DUST_SCATTER_RADIUS_MIN + DUST_SCATTER_RADIUS_SPAN + 1e-4);
    }
}

#[test]
fn scatter_sampling_covers_both_hemispheres() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut top = 0;
    let n = 2000;
    for _ in 0..n {
        if scatter_position(&mut rng, false).z > 0.0 {
            top += 1;
        }
    }
    // Inverse-cosine polar sampling should split evenly; allow wide slack.
    assert!(top > n / 3 && top < 2 * n / 3, "hemisphere split {top}/{n}");
}

#[test]
fn photo_wall_slots_follow_angle_and_row_formula() {
    let total = 7;
    for index in 0..total {
        let p = photo_wall_position(index, total);
        let expected_angle = (index as f32 / total as f32) * std::f32::consts::TAU;
        assert!((p.x - expected_angle.cos() * PHOTO_WALL_RADIUS).abs() < 1e-4);
        assert!((p.z - expected_angle.sin() * PHOTO_WALL_RADIUS).abs() < 1e-4);

        let expected_height = PHOTO_WALL_BASE_HEIGHT + (index % 3) as f32 * PHOTO_WALL_ROW_STEP;
        assert!((p.y - expected_height).abs() < 1e-4);
    }
}

#[test]
fn growing_the_gallery_moves_every_existing_slot() {
    // Full-relayout invariant: going from N to N+1 changes every angle.
    let n = 5;
    for index in 0..n {
        let before = photo_wall_position(index, n);
        let after = photo_wall_position(index, n + 1);
        if index == 0 {
            // Slot zero stays at angle zero by construction.
            assert!((before - after).length() < 1e-4);
        } else {
            assert!(
                (before - after).length() > 1e-3,
                "slot {index} did not move on relayout"
            );
        }
    }
}

#[test]
fn single_photo_sits_on_the_wall_radius() {
    let p = photo_wall_position(0, 1);
    assert!((p.x - PHOTO_WALL_RADIUS).abs() < 1e-4);
    assert!((p.y - PHOTO_WALL_BASE_HEIGHT).abs() < 1e-4);
    assert!(p.z.abs() < 1e-4);
}
