//! Hub Scene Demo
//!
//! Builds the full promo scene and drives it headlessly for a few seconds,
//! cycling through every section and logging what a renderer would see:
//! camera pose, island transforms, particle counts, and the countdown.
//!
//! Run with: cargo run -p vibejam_3d --example hub_demo

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, SystemTime};
use vibejam_3d::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let scheduler = FrameScheduler::new();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2025);

    let deadline = SystemTime::now() + Duration::from_secs(30 * 86_400);
    let mut hub = HubScene::build(&HubLayout::default(), deadline, &scheduler, &mut rng);

    tracing::info!(
        nodes = hub.scene().node_count(),
        fields = hub.scene().field_count(),
        countdown = %hub.countdown().display(SystemTime::now()),
        "hub ready"
    );

    for section in Section::ALL {
        hub.set_section(section);

        // One full transition plus a beat of idle animation
        let frames = ((TRANSITION_SECS + 0.5) / FRAME) as usize;
        for _ in 0..frames {
            scheduler.tick(FRAME);
        }

        let position = hub.context().camera_position();
        let target = hub.context().orbit_target();
        tracing::info!(
            section = %section,
            camera = ?position,
            target = ?target,
            "arrived"
        );

        if let Some(island) = hub.island_node(section) {
            let (y, scale) = hub
                .scene()
                .with_node(island, |n| (n.position.y, n.scale.x))
                .expect("island node exists");
            tracing::info!(section = %section, island_y = y, island_scale = scale, "island state");
        }
    }

    // A quick hover pass over the judges island
    hub.set_island_hovered(Section::Judges, true);
    for _ in 0..60 {
        scheduler.tick(FRAME);
    }
    if let Some(island) = hub.island_node(Section::Judges) {
        let scale = hub
            .scene()
            .with_node(island, |n| n.scale.x)
            .expect("island node exists");
        tracing::info!(island_scale = scale, "hover grew the judges island");
    }
}
