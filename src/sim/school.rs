//! The school: an ordered collection of background fish
//!
//! Order is draw order (later entries render on top) and nothing else;
//! predation queries are order-independent. All operations build new
//! values instead of recursing or mutating through aliases.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scene::Scene;
use crate::sim::fish::{BgFish, PlayerFish, Swimmer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    fish: Vec<BgFish>,
}

impl School {
    pub fn new(fish: Vec<BgFish>) -> Self {
        Self { fish }
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BgFish> {
        self.fish.iter()
    }

    /// Add a fish on top of the draw order.
    pub fn add(&mut self, fish: BgFish) {
        self.fish.push(fish);
    }

    /// Step every fish one tick, threading the world RNG through in
    /// school order so retargets stay deterministic.
    pub fn step_all(&self, rng: &mut impl Rng) -> School {
        School {
            fish: self.fish.iter().map(|f| f.step(rng)).collect(),
        }
    }

    /// Whether some member can eat `prey`. The empty school threatens
    /// nobody.
    pub fn any_eats(&self, prey: &impl Swimmer) -> bool {
        self.fish.iter().any(|f| f.can_eat(prey))
    }

    /// Whether the player can eat some member (the player is the eater
    /// here; the roles are the reverse of `any_eats`).
    pub fn any_eaten_by(&self, player: &PlayerFish) -> bool {
        self.fish.iter().any(|f| player.can_eat(f))
    }

    /// Resolve every meal the player can take this tick in one
    /// left-to-right pass. Eaten members are dropped; for each one the
    /// running player copy grows by a fifth of the meal's size, scores the
    /// same amount, and loses inertia by (size / 100) in integer division
    /// against the already-grown size. Eligibility uses the size the
    /// player has when each member is visited. Returns the surviving
    /// school (original order) and the fed player; neither input is
    /// touched.
    pub fn resolve_meals(&self, player: &PlayerFish) -> (School, PlayerFish) {
        let mut fed = player.clone();
        let mut kept = Vec::with_capacity(self.fish.len());
        for fish in &self.fish {
            if fed.can_eat(fish) {
                fed.size += fish.size / 5;
                fed.score += fish.size / 5;
                // Heavier fish are harder to get moving and to stop.
                // No floor here; coasting clamps at zero.
                fed.inertia -= (fed.size / 100) as f64;
            } else {
                kept.push(fish.clone());
            }
        }
        (School { fish: kept }, fed)
    }

    /// Whether the player is at least as large as every member. Vacuously
    /// true for the empty school.
    pub fn is_player_largest(&self, player: &PlayerFish) -> bool {
        self.fish.iter().all(|f| player.size >= f.size)
    }

    /// Draw every member in school order.
    pub fn draw(&self, scene: &mut Scene) {
        for fish in &self.fish {
            fish.draw(scene);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;

    fn bg(size: i32, x: i32, y: i32) -> BgFish {
        BgFish {
            size,
            color: 0x33_66_99,
            pos: IVec2::new(x, y),
            vel: IVec2::new(1, 0),
            hold_ticks: 10,
        }
    }

    fn player(size: i32, x: i32, y: i32) -> PlayerFish {
        PlayerFish {
            size,
            pos: IVec2::new(x, y),
            ..PlayerFish::default()
        }
    }

    #[test]
    fn test_empty_school_identities() {
        let school = School::default();
        let p = player(12, 400, 400);
        assert!(!school.any_eats(&p));
        assert!(!school.any_eaten_by(&p));
        assert!(school.is_player_largest(&p));

        let (kept, fed) = school.resolve_meals(&p);
        assert!(kept.is_empty());
        assert_eq!(fed, p);

        let mut scene = Scene::new();
        school.draw(&mut scene);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_resolve_meals_growth_law() {
        // One edible fish of size 9 right next to a size-12 player.
        let school = School::new(vec![bg(9, 401, 400)]);
        let p = player(12, 400, 400);
        let (kept, fed) = school.resolve_meals(&p);
        assert!(kept.is_empty());
        assert_eq!(fed.size, 12 + 9 / 5);
        assert_eq!(fed.score, 9 / 5);
    }

    #[test]
    fn test_resolve_meals_keeps_inedible_in_order() {
        let school = School::new(vec![
            bg(30, 400, 400), // too big
            bg(5, 402, 401),  // edible
            bg(11, 700, 100), // too far
        ]);
        let p = player(12, 400, 400);
        let (kept, fed) = school.resolve_meals(&p);
        let sizes: Vec<i32> = kept.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![30, 11]);
        assert_eq!(fed.size, 12 + 1);
        assert_eq!(fed.score, 1);
    }

    #[test]
    fn test_resolve_meals_idempotent_when_nothing_edible() {
        let school = School::new(vec![bg(30, 400, 400), bg(20, 100, 100)]);
        let p = player(12, 400, 400);
        let (kept, fed) = school.resolve_meals(&p);
        assert_eq!(kept, school);
        assert_eq!(fed, p);
    }

    #[test]
    fn test_resolve_meals_growth_extends_reach_within_pass() {
        // First meal grows the player; eligibility for later members uses
        // the grown size, visited left to right.
        let school = School::new(vec![
            bg(11, 400, 400), // edible at size 12, grows player to 14
            bg(13, 400, 400), // only edible once grown
        ]);
        let p = player(12, 400, 400);
        let (kept, fed) = school.resolve_meals(&p);
        assert!(kept.is_empty());
        assert_eq!(fed.size, 12 + 11 / 5 + 13 / 5);
    }

    #[test]
    fn test_inertia_penalty_is_integer_division() {
        // Player below size 100: penalty rounds to zero.
        let school = School::new(vec![bg(9, 401, 400)]);
        let p = player(12, 400, 400);
        let (_, fed) = school.resolve_meals(&p);
        assert_eq!(fed.inertia, p.inertia);

        // Player past 100: each meal costs a whole unit of inertia.
        let school = School::new(vec![bg(9, 401, 400)]);
        let big = player(120, 400, 400);
        let (_, fed) = school.resolve_meals(&big);
        assert_eq!(fed.inertia, big.inertia - 1.0);
    }

    #[test]
    fn test_any_eats_and_any_eaten_by_are_different_directions() {
        // A big fish overlapping a small player: it eats, is not eaten.
        let school = School::new(vec![bg(30, 405, 400)]);
        let p = player(12, 400, 400);
        assert!(school.any_eats(&p));
        assert!(!school.any_eaten_by(&p));

        // A small fish overlapping a big player: reversed.
        let school = School::new(vec![bg(5, 405, 400)]);
        let p = player(12, 400, 400);
        assert!(!school.any_eats(&p));
        assert!(school.any_eaten_by(&p));
    }

    #[test]
    fn test_is_player_largest_ties_count() {
        let school = School::new(vec![bg(12, 100, 100), bg(7, 200, 200)]);
        assert!(school.is_player_largest(&player(12, 400, 400)));
        let school = School::new(vec![bg(13, 100, 100)]);
        assert!(!school.is_player_largest(&player(12, 400, 400)));
    }

    proptest! {
        /// Meals only ever grow the player, and size and score grow in
        /// lockstep.
        #[test]
        fn resolve_meals_never_shrinks(
            sizes in proptest::collection::vec(1..60i32, 0..12),
            px in 0..800i32,
            py in 0..600i32,
        ) {
            let school = School::new(
                sizes.iter().map(|&s| bg(s, px, py)).collect(),
            );
            let p = player(20, px, py);
            let (kept, fed) = school.resolve_meals(&p);
            prop_assert!(fed.size >= p.size);
            prop_assert_eq!(fed.size - p.size, fed.score - p.score);
            prop_assert!(kept.len() <= school.len());
        }
    }
}
