//! Particle integration and cull.

use nebula_core::constants::PARTICLE_DECAY;
use nebula_core::state::World;

/// Advance every particle by its velocity, age it by the fixed decay, and
/// drop it once its life reaches zero. A fresh particle (life 1.0) survives
/// exactly 50 ticks.
pub fn run(world: &mut World) {
    for particle in &mut world.particles {
        particle.body.pos += particle.body.velocity;
        particle.life -= PARTICLE_DECAY;
    }
    world.particles.retain(|p| p.life > 0.0);
}
