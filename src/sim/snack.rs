//! One-shot snacks the player can eat
//!
//! Snacks carry model and effect logic but no spawn path: nothing in the
//! world update places them in the pond, so `apply` and `draw` are only
//! reachable directly. Kept that way on purpose; wiring them into the
//! tick would change gameplay the original never had.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::scene::{self, Scene};
use crate::sim::fish::PlayerFish;

/// Snack radius on screen
const SNACK_RADIUS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Snack {
    /// Grows the player by `growth`
    Size { pos: IVec2, growth: i32 },
    /// Kicks both velocity components up by `boost`. `duration` is
    /// recorded but nothing ticks it down yet.
    Speed {
        pos: IVec2,
        boost: i32,
        duration: i32,
    },
}

impl Snack {
    pub fn pos(&self) -> IVec2 {
        match *self {
            Snack::Size { pos, .. } | Snack::Speed { pos, .. } => pos,
        }
    }

    /// The player after this snack's one-shot effect.
    pub fn apply(&self, player: &PlayerFish) -> PlayerFish {
        match *self {
            Snack::Size { growth, .. } => PlayerFish {
                size: player.size + growth,
                ..player.clone()
            },
            Snack::Speed { boost, .. } => PlayerFish {
                vel: player.vel + IVec2::splat(boost),
                ..player.clone()
            },
        }
    }

    /// Draw as a small filled circle, green for growth and blue for speed.
    pub fn draw(&self, scene: &mut Scene) {
        let color = match self {
            Snack::Size { .. } => scene::GREEN,
            Snack::Speed { .. } => scene::BLUE,
        };
        scene.circle(self.pos(), SNACK_RADIUS, color);
    }
}
