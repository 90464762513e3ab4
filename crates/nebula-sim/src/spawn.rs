//! Entity spawn factories for asteroids, explosion bursts, and the
//! background starfield.
//!
//! All sampling goes through a generic `rand::Rng` so tests can substitute a
//! deterministic source and assert exact parameters; the engine feeds its
//! seeded ChaCha8Rng.

use rand::Rng;

use nebula_core::constants::*;
use nebula_core::entities::{Asteroid, Body, Particle, Star};
use nebula_core::state::alloc_id;
use nebula_core::types::{Rgb, Vec2, Viewport};

/// Spawn one asteroid just past the right edge of the viewport.
///
/// Radius [15, 55), base speed [4, 10) scaled by `difficulty`, vertical
/// drift [-1, 1), spin [-0.05, 0.05), points = floor(radius), and a random
/// mid-gray shade.
pub fn asteroid<R: Rng>(
    rng: &mut R,
    next_id: &mut u32,
    viewport: Viewport,
    difficulty: f64,
) -> Asteroid {
    let radius = rng
        .gen_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS)
        .max(MIN_ENTITY_RADIUS);
    let speed = rng.gen_range(ASTEROID_MIN_BASE_SPEED..ASTEROID_MAX_BASE_SPEED) * difficulty;
    let y = rng.gen_range(0.0..viewport.height.max(1.0));
    let drift = rng.gen_range(-ASTEROID_DRIFT_LIMIT..ASTEROID_DRIFT_LIMIT);
    let rotation_speed = rng.gen_range(-ASTEROID_SPIN_LIMIT..ASTEROID_SPIN_LIMIT);
    let shade = rng.gen_range(ASTEROID_SHADE_MIN..ASTEROID_SHADE_MAX);

    Asteroid {
        id: alloc_id(next_id),
        body: Body {
            pos: Vec2::new(viewport.width + ASTEROID_SPAWN_MARGIN, y),
            radius,
            velocity: Vec2::new(-speed, drift),
            color: Rgb::gray(shade),
        },
        rotation: 0.0,
        rotation_speed,
        points: radius.floor() as u32,
    }
}

/// Push one explosion burst (20 particles) at `origin` into the particle
/// set. Particle radius [0, 3), velocity components [-5, 5), life 1.0.
pub fn explosion_into<R: Rng>(
    particles: &mut Vec<Particle>,
    next_id: &mut u32,
    rng: &mut R,
    origin: Vec2,
    color: Rgb,
) {
    for _ in 0..EXPLOSION_PARTICLES {
        let radius = rng.gen_range(0.0..PARTICLE_MAX_RADIUS);
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
        );
        particles.push(Particle {
            id: alloc_id(next_id),
            body: Body {
                pos: origin,
                radius,
                velocity,
                color,
            },
            life: PARTICLE_INITIAL_LIFE,
            max_life: PARTICLE_INITIAL_LIFE,
        });
    }
}

/// Seed the background starfield for a session: 200 stars scattered over the
/// viewport with individual sizes and scroll speeds.
pub fn starfield<R: Rng>(rng: &mut R, viewport: Viewport) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            pos: Vec2::new(
                rng.gen_range(0.0..viewport.width.max(1.0)),
                rng.gen_range(0.0..viewport.height.max(1.0)),
            ),
            size: rng.gen_range(0.0..STAR_MAX_SIZE),
            speed: rng.gen_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
        })
        .collect()
}
