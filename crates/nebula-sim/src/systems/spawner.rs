//! Opportunistic asteroid spawning.

use rand::Rng;

use nebula_core::constants::ASTEROID_SPAWN_CHANCE;
use nebula_core::state::World;

use crate::spawn;

/// Roll the per-tick spawn chance, scaled by difficulty, and add at most one
/// asteroid. A statistical cadence rather than a scheduler: roughly one
/// spawn every 33 ticks at difficulty 1.0.
pub fn run<R: Rng>(world: &mut World, rng: &mut R, difficulty: f64) {
    if rng.gen::<f64>() < ASTEROID_SPAWN_CHANCE * difficulty {
        let asteroid = spawn::asteroid(rng, &mut world.next_id, world.viewport, difficulty);
        world.asteroids.push(asteroid);
    }
}
