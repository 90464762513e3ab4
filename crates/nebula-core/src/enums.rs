//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase. The simulation only advances while `Playing`;
/// rendering continues in every phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; no session in progress.
    #[default]
    Menu,
    /// Live session; the step runs every tick.
    Playing,
    /// Interlude after crossing a sector threshold; frozen while the lore
    /// request settles.
    SectorBreak,
    /// Session ended by collision; the final state stays on screen.
    GameOver,
}
