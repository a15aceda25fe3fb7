//! Pond Frenzy - a pond survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, predation, world state)
//! - `scene`: Draw-command composition for an external presentation surface
//!
//! The crate never touches a window or a timer; a host drives it with tick
//! and key events and renders the `Scene` it produces.

pub mod scene;
pub mod sim;

pub use scene::{Primitive, Scene};
pub use sim::{BgFish, GamePhase, Key, PlayerFish, School, Snack, Swimmer, World};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Pond (and canvas) dimensions
    pub const POND_WIDTH: i32 = 800;
    pub const POND_HEIGHT: i32 = 600;
    pub const POND_SIZE: IVec2 = IVec2::new(POND_WIDTH, POND_HEIGHT);
    /// Respawn point for the player
    pub const POND_CENTER: IVec2 = IVec2::new(POND_WIDTH / 2, POND_HEIGHT / 2);

    /// Real-time interval the host should deliver ticks at (seconds)
    pub const TICK_INTERVAL: f32 = 0.1;
    /// A new background fish appears every this many ticks
    pub const SPAWN_PERIOD: u64 = 100;

    /// Player defaults
    pub const PLAYER_START_SIZE: i32 = 12;
    pub const PLAYER_START_POS: IVec2 = IVec2::new(400, 400);
    pub const PLAYER_SPEED: i32 = 10;
    pub const PLAYER_START_INERTIA: f64 = 0.85;
    pub const STARTING_LIVES: u32 = 3;

    /// Background fish direction-hold countdown is sampled from [0, HOLD_TICKS_MAX)
    pub const HOLD_TICKS_MAX: i32 = 100;
    /// Spawned fish size range (half-open)
    pub const SPAWN_SIZE_MIN: i32 = 10;
    pub const SPAWN_SIZE_MAX: i32 = 100;
}

/// Wrap a position onto the pond torus: coordinates land in [0,800) x [0,600)
/// no matter how far outside the displacement went.
#[inline]
pub fn wrap(pos: IVec2) -> IVec2 {
    pos.rem_euclid(consts::POND_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_identity_in_bounds() {
        assert_eq!(wrap(IVec2::new(0, 0)), IVec2::new(0, 0));
        assert_eq!(wrap(IVec2::new(799, 599)), IVec2::new(799, 599));
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(IVec2::new(800, 600)), IVec2::new(0, 0));
        assert_eq!(wrap(IVec2::new(-1, -1)), IVec2::new(799, 599));
        assert_eq!(wrap(IVec2::new(-10, 605)), IVec2::new(790, 5));
    }

    proptest! {
        #[test]
        fn wrap_always_lands_in_pond(
            x in 0..800i32,
            y in 0..600i32,
            dx in -2400..=2400i32,
            dy in -1800..=1800i32,
        ) {
            let p = wrap(IVec2::new(x + dx, y + dy));
            prop_assert!((0..800).contains(&p.x));
            prop_assert!((0..600).contains(&p.y));
        }

        /// Matches the (x + dx + 800) % 800 law for single-step displacements.
        #[test]
        fn wrap_matches_modular_law(x in 0..800i32, dx in -800..=800i32) {
            let p = wrap(IVec2::new(x + dx, 0));
            prop_assert_eq!(p.x, (x + dx + 800) % 800);
        }
    }
}
