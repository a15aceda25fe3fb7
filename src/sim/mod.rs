//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, driven by the host
//! - Seeded RNG only, owned by the `World` and threaded explicitly
//! - Stable iteration order (school order is draw order)
//! - No rendering or platform dependencies beyond emitting a `Scene`

pub mod fish;
pub mod school;
pub mod snack;
pub mod world;

pub use fish::{BgFish, Key, PlayerFish, Swimmer};
pub use school::School;
pub use snack::Snack;
pub use world::{GamePhase, World};
