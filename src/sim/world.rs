//! The pond world: one discrete simulation step at a time
//!
//! The world is replaced wholesale on every event; `tick` and `on_key`
//! consume the old value and return the next one. All entropy comes from
//! the single world-owned RNG, so a seed plus an input sequence replays
//! the whole game.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{
    HOLD_TICKS_MAX, POND_CENTER, POND_HEIGHT, SPAWN_PERIOD, SPAWN_SIZE_MAX, SPAWN_SIZE_MIN,
};
use crate::scene::{self, Color, Scene};
use crate::sim::fish::{BgFish, Key, PlayerFish};
use crate::sim::school::School;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active play
    Swimming,
    /// Player became the largest fish in the pond
    Won,
    /// Player was eaten with no lives left
    Lost,
}

/// Sizes and colors of the twenty starter fish, in draw order (last on
/// top). Positions are rolled from the world RNG at creation.
const STARTER_ROSTER: [(i32, Color); 20] = [
    (10, scene::BLUE),
    (15, scene::RED),
    (5, scene::GREEN),
    (20, scene::ORANGE),
    (8, scene::MAGENTA),
    (12, scene::CYAN),
    (18, scene::PINK),
    (25, scene::GRAY),
    (30, scene::DARK_GRAY),
    (7, scene::LIGHT_GRAY),
    (9, scene::BLACK),
    (14, scene::BLUE),
    (11, scene::RED),
    (17, scene::GREEN),
    (22, scene::ORANGE),
    (6, scene::MAGENTA),
    (13, scene::CYAN),
    (21, scene::PINK),
    (23, scene::GRAY),
    (24, scene::DARK_GRAY),
];

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Background fish, in draw order
    pub school: School,
    /// The player
    pub player: PlayerFish,
    /// Simulation tick counter
    pub ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// World-owned RNG; every entropy consumer threads through here
    rng: Pcg32,
}

impl World {
    /// A fresh pond: twenty starter fish at random spots and the default
    /// player, everything seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let fish = STARTER_ROSTER
            .iter()
            .map(|&(size, color)| BgFish::starter(size, color, &mut rng))
            .collect();
        Self {
            seed,
            school: School::new(fish),
            player: PlayerFish::default(),
            ticks: 0,
            phase: GamePhase::Swimming,
            rng,
        }
    }

    /// Advance one tick. Fixed order: resolve meals, spawn on the cadence,
    /// move everything, count the tick, then check for an ending. Finished
    /// worlds pass through unchanged.
    pub fn tick(mut self) -> World {
        if self.phase != GamePhase::Swimming {
            return self;
        }

        let (school, player) = self.school.resolve_meals(&self.player);
        self.school = school;
        self.player = player;

        if self.ticks % SPAWN_PERIOD == 0 {
            let newcomer = self.spawn_fish();
            log::debug!(
                "tick {}: new fish, size {} entering at y={}",
                self.ticks,
                newcomer.size,
                newcomer.pos.y
            );
            self.school.add(newcomer);
        }

        self.school = self.school.step_all(&mut self.rng);
        self.player = self.player.coast();
        self.ticks += 1;

        self.evaluate_end()
    }

    /// Handle a key event from the host. Skips the whole tick pipeline:
    /// the player is replaced with its directed-move result and the tick
    /// counter advances, then the ending check runs as it does for ticks.
    pub fn on_key(mut self, key: &str) -> World {
        if self.phase != GamePhase::Swimming {
            return self;
        }
        self.player = self.player.steer(Key::parse(key));
        self.ticks += 1;
        self.evaluate_end()
    }

    /// A fresh background fish entering from the left edge.
    fn spawn_fish(&mut self) -> BgFish {
        let rng = &mut self.rng;
        BgFish {
            size: rng.random_range(SPAWN_SIZE_MIN..SPAWN_SIZE_MAX),
            color: rng.random::<u32>() & 0xFF_FF_FF,
            pos: IVec2::new(0, rng.random_range(0..POND_HEIGHT)),
            vel: IVec2::new(rng.random_range(1..4), rng.random_range(-1..2)),
            hold_ticks: rng.random_range(0..HOLD_TICKS_MAX),
        }
    }

    /// Win/lose evaluation, run once per counted tick. Being eaten costs a
    /// life (terminal on the last one); otherwise being at least as large
    /// as every remaining fish wins.
    fn evaluate_end(mut self) -> World {
        if self.school.any_eats(&self.player) {
            if self.player.lives <= 1 {
                self.player.lives = 0;
                self.phase = GamePhase::Lost;
                log::info!("eaten with no lives left at tick {}", self.ticks);
            } else {
                self.player = self.player.respawn(POND_CENTER);
                log::info!(
                    "eaten at tick {}; respawned with {} lives",
                    self.ticks,
                    self.player.lives
                );
            }
        } else if self.school.is_player_largest(&self.player) {
            self.phase = GamePhase::Won;
            log::info!(
                "largest fish in the pond at tick {} (score {})",
                self.ticks,
                self.player.score
            );
        }
        self
    }

    /// Compose the drawable scene: school, player, HUD, and the phase
    /// overlay for finished games.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        self.school.draw(&mut scene);
        self.player.draw(&mut scene);

        scene.text(
            IVec2::new(100, 50),
            30,
            scene::BLACK,
            format!("Score: {}", self.player.score * 10),
        );
        scene.text(
            IVec2::new(100, 100),
            30,
            scene::BLACK,
            format!("Lives: {}", self.player.lives),
        );

        match self.phase {
            GamePhase::Swimming => {}
            GamePhase::Lost => {
                scene.text(POND_CENTER, 50, scene::RED, "Game Over! You Lost!");
            }
            GamePhase::Won => {
                scene.text(
                    POND_CENTER - IVec2::new(0, 25),
                    50,
                    scene::GREEN,
                    "Congratulations! You Won!",
                );
                scene.text(
                    POND_CENTER + IVec2::new(0, 25),
                    50,
                    scene::GREEN,
                    "You are the largest fish!",
                );
            }
        }

        scene
    }
}
