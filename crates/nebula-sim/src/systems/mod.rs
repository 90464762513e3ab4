//! Per-tick systems run in a fixed order by the engine.
//!
//! Systems are free functions over `&mut World` (plus rng and event buffer
//! where needed). They own no state; everything lives in the world and the
//! engine. The order is fixed in `SimulationEngine::run_systems` and matters
//! for collision-vs-cleanup correctness.

pub mod asteroids;
pub mod particles;
pub mod spawner;
pub mod starfield;
pub mod steering;
