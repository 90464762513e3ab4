//! Events emitted by the simulation for the driving application.

use serde::{Deserialize, Serialize};

/// Signals surfaced by a tick. At most one per tick in practice: a game-over
/// tick skips scoring, so the two variants cannot coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The ship collided with an asteroid; `score` is the final score.
    GameOver { score: u64 },
    /// The score crossed a sector threshold; the sector break begins.
    SectorComplete { score: u64 },
}
