//! Headless simulation engine for Nebula Voyager.
//!
//! Owns the entity world, advances it one ordered step per tick while the
//! session is live, and surfaces game-over / sector-complete events to the
//! driving application. No windowing dependency, enabling deterministic
//! testing.

pub mod engine;
pub mod spawn;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use nebula_core as core;
