//! Simulation constants and tuning parameters.

use crate::types::Rgb;

// --- Viewport ---

/// Default viewport width in pixels (used until the window reports a size).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// --- Player ---

/// Fixed horizontal position of the ship.
pub const PLAYER_X: f64 = 100.0;

/// Collision radius of the ship.
pub const PLAYER_RADIUS: f64 = 15.0;

/// Fraction of the remaining distance to `target_y` covered per tick.
/// Gives a critically-damped exponential approach to the pointer.
pub const PLAYER_APPROACH_RATE: f64 = 0.15;

// --- Asteroids ---

/// Asteroid radius is sampled uniformly from [min, max).
pub const ASTEROID_MIN_RADIUS: f64 = 15.0;
pub const ASTEROID_MAX_RADIUS: f64 = 55.0;

/// Base leftward speed is sampled uniformly from [min, max) in pixels per
/// tick, then scaled by the difficulty multiplier.
pub const ASTEROID_MIN_BASE_SPEED: f64 = 4.0;
pub const ASTEROID_MAX_BASE_SPEED: f64 = 10.0;

/// Bound on the vertical drift component, sampled from [-limit, limit).
pub const ASTEROID_DRIFT_LIMIT: f64 = 1.0;

/// Bound on per-tick rotation, sampled from [-limit, limit) radians.
pub const ASTEROID_SPIN_LIMIT: f64 = 0.05;

/// Asteroids spawn this far past the right edge of the viewport.
pub const ASTEROID_SPAWN_MARGIN: f64 = 100.0;

/// Asteroids are culled once their x-coordinate drops to this or below.
pub const ASTEROID_CULL_X: f64 = -150.0;

/// Per-tick spawn probability at difficulty 1.0. Scales linearly with
/// difficulty: roughly one spawn every 33 ticks to start.
pub const ASTEROID_SPAWN_CHANCE: f64 = 0.03;

/// Asteroid surface shade is a gray sampled from [min, max).
pub const ASTEROID_SHADE_MIN: u8 = 77;
pub const ASTEROID_SHADE_MAX: u8 = 179;

/// Defensive floor for any generated radius.
pub const MIN_ENTITY_RADIUS: f64 = 1.0;

// --- Particles ---

/// Number of particles in one explosion burst.
pub const EXPLOSION_PARTICLES: usize = 20;

/// Particle radius is sampled uniformly from [0, max).
pub const PARTICLE_MAX_RADIUS: f64 = 3.0;

/// Each particle velocity component is sampled from [-spread, spread).
pub const PARTICLE_SPREAD: f64 = 5.0;

/// Life lost per tick. A fresh particle lives exactly 50 ticks.
pub const PARTICLE_DECAY: f64 = 0.02;

/// Life assigned to a newly spawned particle.
pub const PARTICLE_INITIAL_LIFE: f64 = 1.0;

// --- Stars ---

/// Number of background stars per session.
pub const STAR_COUNT: usize = 200;

/// Star size is sampled uniformly from [0, max).
pub const STAR_MAX_SIZE: f64 = 2.0;

/// Star scroll speed is sampled uniformly from [min, max) pixels per tick.
pub const STAR_MIN_SPEED: f64 = 1.0;
pub const STAR_MAX_SPEED: f64 = 3.0;

// --- Progression ---

/// Score units per sector; thresholds sit at 1500, 3000, 4500, ...
pub const SECTOR_LENGTH: u64 = 1500;

/// Difficulty multiplier at session start.
pub const BASE_DIFFICULTY: f64 = 1.0;

/// Difficulty added for each completed sector.
pub const DIFFICULTY_STEP: f64 = 0.2;

// --- Colors ---

/// Hull color of the ship; also the color of its half of a collision burst.
pub const SHIP_COLOR: Rgb = Rgb::new(0x38, 0xbd, 0xf8);

/// Cockpit canopy highlight.
pub const COCKPIT_COLOR: Rgb = Rgb::new(0xba, 0xe6, 0xfd);

/// Asteroid outline and the asteroid half of a collision burst.
pub const DEBRIS_COLOR: Rgb = Rgb::new(0x94, 0xa3, 0xb8);

/// Deep-space background.
pub const SPACE_COLOR: Rgb = Rgb::new(0x02, 0x06, 0x17);

/// Star color.
pub const STAR_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);
