//! The mutable entity world owned by the simulation engine.

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_RADIUS, PLAYER_X, SHIP_COLOR};
use crate::entities::{Asteroid, Body, Particle, Player, Star};
use crate::types::{Vec2, Viewport};

/// All live entity state for one session. The engine owns exactly one of
/// these and hands mutation rights to each system per tick; there are no
/// ambient globals.
///
/// Asteroids and particles are unordered sets culled in place with `retain`;
/// nothing looks entities up by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub viewport: Viewport,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// Next entity id. Monotonic within a session, so an id is never reused
    /// while its holder is still live.
    pub next_id: u32,
}

impl World {
    /// Fresh world: player centered on the left lane, no asteroids, no
    /// particles. Stars are seeded separately by the generator.
    pub fn new(viewport: Viewport) -> Self {
        let mut next_id = 0;
        let player = Player {
            id: alloc_id(&mut next_id),
            body: Body {
                pos: Vec2::new(PLAYER_X, viewport.center_y()),
                radius: PLAYER_RADIUS,
                velocity: Vec2::ZERO,
                color: SHIP_COLOR,
            },
            target_y: viewport.center_y(),
        };
        Self {
            viewport,
            player,
            asteroids: Vec::new(),
            particles: Vec::new(),
            stars: Vec::new(),
            next_id,
        }
    }
}

/// Take the next id from a session counter.
pub fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
