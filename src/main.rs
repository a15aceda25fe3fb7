//! Pond Frenzy entry point
//!
//! Headless driver: seeds a world, pumps ticks at the simulation cadence,
//! and dumps the final scene as JSON for whatever surface wants to draw
//! it. A windowed host would deliver real key events the same way via
//! `World::on_key`.

use pond_frenzy::sim::{GamePhase, World};

/// Safety cap so a stalemate pond still terminates.
const MAX_TICKS: u64 = 100_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("system clock before unix epoch")
                .as_millis() as u64
        });

    log::info!("Pond Frenzy starting with seed {seed}");
    let mut world = World::new(seed);

    while world.phase == GamePhase::Swimming && world.ticks < MAX_TICKS {
        world = world.tick();
    }

    match world.phase {
        GamePhase::Won => log::info!(
            "won at tick {} with score {}",
            world.ticks,
            world.player.score * 10
        ),
        GamePhase::Lost => log::info!("lost at tick {}", world.ticks),
        GamePhase::Swimming => log::warn!("tick cap reached; pond never resolved"),
    }

    let scene = world.scene();
    println!(
        "{}",
        serde_json::to_string_pretty(&scene).expect("scene serializes")
    );
}
