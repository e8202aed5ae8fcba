//! Headless driver: runs the scene core against a scripted gesture sequence.
//!
//! Useful for eyeballing the state machine and placement behavior without a
//! renderer or camera attached: every committed mode change and focus pick is
//! logged, and a short transform summary prints at the end of each phase.

use instant::Instant;
use noel_core::sim;
use noel_core::{DisplayMode, LandmarkFrame, SceneConfig, SceneEvent, SceneState};

const FRAME_DT: f32 = 1.0 / 60.0;

struct Phase {
    label: &'static str,
    frames: usize,
    pose: Option<LandmarkFrame>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let build_start = Instant::now();
    let mut scene = SceneState::new(SceneConfig::default(), seed);
    for _ in 0..6 {
        scene.add_photo();
    }
    log::info!(
        "scene ready: {} particles, {} photos, seed {seed} ({:?})",
        scene.particles().len(),
        scene.photo_count(),
        build_start.elapsed()
    );

    let script = [
        Phase {
            label: "open hand, scene scatters",
            frames: 120,
            pose: Some(sim::open_hand()),
        },
        Phase {
            label: "hand leaves the frame",
            frames: 60,
            pose: None,
        },
        Phase {
            label: "pinch held, focus commits after the debounce",
            frames: 90,
            pose: Some(sim::pinch()),
        },
        Phase {
            label: "two fingers, dead zone, nothing changes",
            frames: 60,
            pose: Some(sim::partial_hand(2)),
        },
        Phase {
            label: "fist, back to the tree",
            frames: 120,
            pose: Some(sim::fist()),
        },
    ];

    for phase in &script {
        log::info!("phase: {}", phase.label);
        for _ in 0..phase.frames {
            for event in scene.observe_hand(phase.pose.as_ref()) {
                match event {
                    SceneEvent::ModeChanged { from, to } => {
                        log::info!("mode {from:?} -> {to:?}");
                    }
                    SceneEvent::FocusChanged { target } => {
                        log::info!("focus target: {target:?}");
                    }
                }
            }
            scene.advance(FRAME_DT);
        }
        summarize(&scene);
    }

    if scene.mode() != DisplayMode::Tree {
        log::warn!("script ended in {:?}, expected Tree", scene.mode());
    }
    Ok(())
}

fn summarize(scene: &SceneState) {
    let rot = scene.group_rotation();
    let first = &scene.particles()[0];
    log::info!(
        "mode {:?}, group rot ({:.2}, {:.2}), particle 0 at ({:.2}, {:.2}, {:.2}) scale {:.2}, {} snow flakes",
        scene.mode(),
        rot.x,
        rot.y,
        first.position.x,
        first.position.y,
        first.position.z,
        first.scale,
        scene.snow().positions().len()
    );
}
