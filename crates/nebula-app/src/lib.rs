//! Desktop client for Nebula Voyager.
//!
//! Owns everything outside the simulation: the window and frame loop,
//! pointer input, scene rendering, phase overlays, and the persisted pilot
//! profile. The simulation itself lives in `nebula-sim` and is advanced one
//! tick per rendered frame.

pub mod input;
pub mod overlay;
pub mod profile;
pub mod render;
pub mod theme;
