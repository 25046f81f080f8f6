//! Catch chance
//!
//! Higher base experience means a harder catch, bounded between
//! `MIN_CHANCE` and `MAX_CHANCE` percent.

use rand::Rng;

// == Bounds ==
/// Catch chance, in percent, for the most experienced pokemon.
pub const MIN_CHANCE: f64 = 30.0;
/// Catch chance, in percent, for a pokemon with no base experience.
pub const MAX_CHANCE: f64 = 80.0;
/// Highest base experience in the catalog (blissey)
pub const MAX_BASE_EXPERIENCE: f64 = 608.0;

// == Chance ==
/// Percent chance of catching a pokemon with `base_experience`.
pub fn catch_chance(base_experience: u32) -> f64 {
    let scaled = f64::from(base_experience) / MAX_BASE_EXPERIENCE;
    (MAX_CHANCE - scaled * (MAX_CHANCE - MIN_CHANCE)).clamp(MIN_CHANCE, MAX_CHANCE)
}

// == Roll ==
/// A roll in `[0, 100)` succeeds when it is at or below the chance.
pub fn is_caught(chance: f64, roll: f64) -> bool {
    roll <= chance
}

/// Uniform roll in `[0, 100)`.
pub fn random_roll() -> f64 {
    rand::thread_rng().gen_range(0.0..100.0)
}
