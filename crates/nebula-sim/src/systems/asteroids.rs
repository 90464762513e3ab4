//! Asteroid integration, collision resolution, and cull.

use rand::Rng;

use nebula_core::constants::{ASTEROID_CULL_X, DEBRIS_COLOR, SHIP_COLOR};
use nebula_core::events::SimEvent;
use nebula_core::state::World;

use crate::spawn;

/// Advance, collide, and cull the asteroid set in one in-place pass.
///
/// The first asteroid overlapping the player ends the session: one explosion
/// burst at the ship and one at the asteroid, a single `GameOver` event
/// carrying `score`, and removal of that asteroid. Asteroids later in the
/// pass still advance and cull for visual consistency but cannot report a
/// second game over. Returns true when the session ended this tick.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
    score: u64,
) -> bool {
    let World {
        player,
        asteroids,
        particles,
        next_id,
        ..
    } = world;
    let mut game_over = false;

    asteroids.retain_mut(|asteroid| {
        asteroid.body.pos += asteroid.body.velocity;
        asteroid.rotation += asteroid.rotation_speed;

        if !game_over && asteroid.body.overlaps(&player.body) {
            spawn::explosion_into(particles, next_id, rng, player.body.pos, SHIP_COLOR);
            spawn::explosion_into(particles, next_id, rng, asteroid.body.pos, DEBRIS_COLOR);
            events.push(SimEvent::GameOver { score });
            game_over = true;
            return false;
        }

        asteroid.body.pos.x > ASTEROID_CULL_X
    });

    game_over
}
