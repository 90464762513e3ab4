//! Player steering: eases the ship toward the pointer target.

use nebula_core::constants::PLAYER_APPROACH_RATE;
use nebula_core::state::World;

/// Move the ship a fixed fraction of the remaining distance to `target_y`.
/// Critically-damped exponential approach, never an instant teleport; the
/// ship's x stays fixed.
pub fn run(world: &mut World) {
    let player = &mut world.player;
    player.body.pos.y += (player.target_y - player.body.pos.y) * PLAYER_APPROACH_RATE;
}
