//! Pilot profile persistence. One scalar survives across runs: the best
//! distance ever flown. Absence or corruption of the file reads as zero;
//! neither is surfaced to the player.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PilotProfile {
    pub high_score: u64,
}

fn profile_path() -> PathBuf {
    PathBuf::from("nebula_highscore.json")
}

/// Read the stored high score, defaulting to zero on any failure.
pub fn load_high_score() -> u64 {
    load_from(&profile_path())
}

/// Persist a new high score. Write failures are logged and swallowed.
pub fn store_high_score(score: u64) {
    store_to(&profile_path(), score);
}

pub(crate) fn load_from(path: &Path) -> u64 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::info!("no pilot profile at {}: {err}", path.display());
            return 0;
        }
    };
    match serde_json::from_str::<PilotProfile>(&raw) {
        Ok(profile) => profile.high_score,
        Err(err) => {
            log::warn!("ignoring corrupt pilot profile {}: {err}", path.display());
            0
        }
    }
}

pub(crate) fn store_to(path: &Path, score: u64) {
    let profile = PilotProfile { high_score: score };
    let serialized = match serde_json::to_string(&profile) {
        Ok(serialized) => serialized,
        Err(err) => {
            log::warn!("could not serialize pilot profile: {err}");
            return;
        }
    };
    match fs::write(path, serialized) {
        Ok(()) => log::info!("new best distance stored: {score} LY"),
        Err(err) => log::warn!("could not store pilot profile {}: {err}", path.display()),
    }
}
