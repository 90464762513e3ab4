//! Background star scroll. Cosmetic; no gameplay coupling.

use nebula_core::state::World;

/// Scroll each star leftward by its own speed, wrapping to the right edge of
/// the viewport once it crosses x = 0.
pub fn run(world: &mut World) {
    let right_edge = world.viewport.width;
    for star in &mut world.stars {
        star.pos.x -= star.speed;
        if star.pos.x < 0.0 {
            star.pos.x = right_edge;
        }
    }
}
