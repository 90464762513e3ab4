//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! arriving in a phase where it does not apply is ignored.

use serde::{Deserialize, Serialize};

/// All possible player actions. Steering input is not a command: the latest
/// pointer target overwrites `Player::target_y` directly, last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a session from the menu.
    StartGame,
    /// Leave the sector break and fly on.
    Resume,
    /// Begin a fresh session from the game-over screen.
    Restart,
    /// Return to the menu from the game-over screen.
    ReturnToMenu,
}
