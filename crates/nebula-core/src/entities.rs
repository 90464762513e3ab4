//! Gameplay entity records.
//!
//! Entities are plain data structs composed around a shared [`Body`] holding
//! geometry and motion. Each collection is processed homogeneously by its own
//! simulation system; no dispatch over entity kinds.

use serde::{Deserialize, Serialize};

use crate::types::{Rgb, Vec2};

/// Geometry and motion fields embedded in every gameplay entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position in viewport space.
    pub pos: Vec2,
    /// Collision and display radius. Always positive.
    pub radius: f64,
    /// Displacement applied per tick.
    pub velocity: Vec2,
    /// Display attribute; opaque to the simulation.
    pub color: Rgb,
}

impl Body {
    /// Circle-overlap test: strict Euclidean center distance against the sum
    /// of radii. Touching circles (distance == sum) do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// The player's ship. Exactly one per session, created at session start and
/// never removed; a collision is the game-over signal, not a despawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub body: Body,
    /// Desired vertical position, overwritten by the input adapter. The
    /// steering system eases `body.pos.y` toward it each tick.
    pub target_y: f64,
}

/// A hazard drifting leftward across the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    /// Current facing in radians; wraps freely.
    pub rotation: f64,
    /// Radians added to `rotation` per tick, fixed at spawn.
    pub rotation_speed: f64,
    /// Scoring weight (floor of radius). Carried but not yet consumed.
    pub points: u32,
}

/// Short-lived explosion debris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub body: Body,
    /// Remaining life, decaying 1 -> 0; culled at <= 0.
    pub life: f64,
    /// Initial life, kept for fade curves.
    pub max_life: f64,
}

/// Background parallax star. Decorative only; independent of gameplay
/// entities and regenerated on session init.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f64,
    /// Leftward scroll speed in pixels per tick.
    pub speed: f64,
}
