//! Fish entities: random-walking background fish and the player
//!
//! Both kinds are persistent value types: every movement entry point
//! returns a new fish rather than mutating in place.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    HOLD_TICKS_MAX, PLAYER_SPEED, PLAYER_START_INERTIA, PLAYER_START_POS, PLAYER_START_SIZE,
    POND_HEIGHT, POND_WIDTH, STARTING_LIVES,
};
use crate::scene::{self, Color, Scene};
use crate::sim::snack::Snack;
use crate::wrap;

/// Anything in the pond that can contest a meal.
pub trait Swimmer {
    fn size(&self) -> i32;
    fn pos(&self) -> IVec2;

    /// Whether this swimmer can eat `prey`: strictly larger, and within an
    /// axis-aligned box scaled by the eater's own size. Deliberately cheap
    /// and asymmetric; this is not a circular distance test.
    fn can_eat(&self, prey: &impl Swimmer) -> bool {
        let d = (self.pos() - prey.pos()).abs();
        self.size() > prey.size() && d.x < self.size() && d.y < self.size()
    }
}

/// A non-player fish following a randomized direction-hold walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgFish {
    pub size: i32,
    pub color: Color,
    pub pos: IVec2,
    pub vel: IVec2,
    /// Ticks left before a new direction is drawn
    pub hold_ticks: i32,
}

impl Swimmer for BgFish {
    fn size(&self) -> i32 {
        self.size
    }

    fn pos(&self) -> IVec2 {
        self.pos
    }
}

impl BgFish {
    /// A starter fish: known size and color, random position, drifting
    /// right until its first retarget.
    pub fn starter(size: i32, color: Color, rng: &mut impl Rng) -> Self {
        Self {
            size,
            color,
            pos: IVec2::new(
                rng.random_range(0..POND_WIDTH),
                rng.random_range(0..POND_HEIGHT),
            ),
            vel: IVec2::new(1, 0),
            hold_ticks: rng.random_range(0..HOLD_TICKS_MAX),
        }
    }

    /// Advance one tick. While the hold countdown runs, drift and wrap;
    /// when it hits zero, stay put and draw a fresh diagonal direction and
    /// a fresh countdown from the world RNG.
    pub fn step(&self, rng: &mut impl Rng) -> BgFish {
        if self.hold_ticks <= 0 {
            let dx = if rng.random_range(0..2) == 0 { -1 } else { 1 };
            let dy = if rng.random_range(0..2) == 0 { -1 } else { 1 };
            BgFish {
                vel: IVec2::new(dx, dy),
                hold_ticks: rng.random_range(0..HOLD_TICKS_MAX),
                ..self.clone()
            }
        } else {
            BgFish {
                pos: wrap(self.pos + self.vel),
                hold_ticks: self.hold_ticks - 1,
                ..self.clone()
            }
        }
    }

    /// Draw as a filled circle sized to the fish.
    pub fn draw(&self, scene: &mut Scene) {
        scene.circle(self.pos, self.size, self.color);
    }
}

/// A recognized movement key. Anything else the host sends is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            _ => None,
        }
    }
}

/// The player-controlled fish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerFish {
    pub size: i32,
    pub color: Color,
    pub pos: IVec2,
    pub vel: IVec2,
    pub score: i32,
    pub lives: u32,
    /// Velocity decay factor per coast step; shrinks as the player grows
    /// and is floored at 0 when used.
    pub inertia: f64,
    /// Step magnitude a keypress sets on one axis
    pub speed: i32,
}

impl Swimmer for PlayerFish {
    fn size(&self) -> i32 {
        self.size
    }

    fn pos(&self) -> IVec2 {
        self.pos
    }
}

impl Default for PlayerFish {
    fn default() -> Self {
        Self {
            size: PLAYER_START_SIZE,
            color: scene::YELLOW,
            pos: PLAYER_START_POS,
            vel: IVec2::ZERO,
            score: 0,
            lives: STARTING_LIVES,
            inertia: PLAYER_START_INERTIA,
            speed: PLAYER_SPEED,
        }
    }
}

impl PlayerFish {
    /// Directed move: a recognized key overwrites one velocity axis with
    /// the full step magnitude, then the position advances by the current
    /// velocity with wraparound. `None` (unrecognized key) still advances.
    pub fn steer(&self, key: Option<Key>) -> PlayerFish {
        let mut vel = self.vel;
        match key {
            Some(Key::Left) => vel.x = -self.speed,
            Some(Key::Right) => vel.x = self.speed,
            Some(Key::Up) => vel.y = -self.speed,
            Some(Key::Down) => vel.y = self.speed,
            None => {}
        }
        PlayerFish {
            pos: wrap(self.pos + vel),
            vel,
            ..self.clone()
        }
    }

    /// Inertial move: velocity decays by the inertia factor (truncating
    /// toward zero) and the decayed velocity is both applied and stored,
    /// so coasting without input dies out exponentially.
    pub fn coast(&self) -> PlayerFish {
        let inertia = self.inertia.max(0.0);
        let vel = IVec2::new(
            (self.vel.x as f64 * inertia) as i32,
            (self.vel.y as f64 * inertia) as i32,
        );
        PlayerFish {
            pos: wrap(self.pos + vel),
            vel,
            inertia,
            ..self.clone()
        }
    }

    /// The player after losing a life: back at `center`, one life down,
    /// everything else (size, score, velocity, inertia) carried over.
    pub fn respawn(&self, center: IVec2) -> PlayerFish {
        PlayerFish {
            pos: center,
            lives: self.lives.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Apply `snack` if it sits within half the player's size on both
    /// axes; otherwise return the player unchanged.
    pub fn eat_snack(&self, snack: &Snack) -> PlayerFish {
        let d = (self.pos - snack.pos()).abs();
        if d.x < self.size / 2 && d.y < self.size / 2 {
            snack.apply(self)
        } else {
            self.clone()
        }
    }

    /// Draw as a filled circle with a "You" label scaled to the fish.
    pub fn draw(&self, scene: &mut Scene) {
        scene.circle(self.pos, self.size, self.color);
        scene.text(self.pos, self.size / 6 + 10, scene::BLACK, "You");
    }
}
