//! Offline lore source backed by word tables.
//!
//! Stands in for a remote gateway: every record is generated locally from
//! the score that triggered the request, so the same sector crossing always
//! produces the same chart entry.

use nebula_core::constants::SECTOR_LENGTH;
use nebula_core::lore::SectorLore;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::source::{LoreError, LoreSource};

const REGION_NAMES: &[&str] = &[
    "Cygnus", "Perseus", "Vela", "Lyra", "Draco", "Calypso", "Meridian", "Halcyon", "Tycho",
    "Kessler", "Aurelia", "Oberon",
];

const REGION_KINDS: &[&str] = &[
    "Shallows", "Expanse", "Drift", "Reach", "Verge", "Straits", "Barrens", "Corridor",
];

const SIGHTS: &[&str] = &[
    "Dust from a shattered moon glitters along the approach lanes",
    "Derelict freighters tumble in a slow procession here",
    "An old mining claim left the belt carved into unstable shelves",
    "Ion storms have scoured every beacon in this region dark",
    "Charts of this volume end in hand-drawn guesses",
    "A failed colony ship seeded this drift with frozen wreckage",
    "Survey probes report rock densities far above the charted norm",
    "Light from a dying star throws long shadows through the field",
];

const WARNINGS: &[&str] = &[
    "debris density rises sharply past the marker buoys",
    "rock swarms here move faster than the charts admit",
    "no rescue craft patrol beyond this line",
    "transponder coverage is unreliable for the next crossing",
    "larger bodies calve without warning in this volume",
    "previous transits report near-misses within the first span",
];

/// Hazard classifications by sectors cleared, clamped at the top rung.
const HAZARD_LADDER: &[&str] = &["LOW", "GUARDED", "ELEVATED", "HIGH", "SEVERE", "EXTREME"];

/// Deterministic chart generator. The score at the sector crossing seeds the
/// generator, so retries and replays settle on identical records.
#[derive(Debug, Default)]
pub struct StarchartSource;

impl StarchartSource {
    pub fn new() -> Self {
        Self
    }

    /// Build the chart entry for the sector reached at `score`.
    pub fn chart(&self, score: u64) -> SectorLore {
        let mut rng = ChaCha8Rng::seed_from_u64(score);
        let region = REGION_NAMES[rng.gen_range(0..REGION_NAMES.len())];
        let kind = REGION_KINDS[rng.gen_range(0..REGION_KINDS.len())];
        let sight = SIGHTS[rng.gen_range(0..SIGHTS.len())];
        let warning = WARNINGS[rng.gen_range(0..WARNINGS.len())];

        // First crossing lands on the bottom rung; deep runs clamp at the top.
        let rung = ((score / SECTOR_LENGTH).saturating_sub(1) as usize)
            .min(HAZARD_LADDER.len() - 1);

        SectorLore {
            name: format!("The {region} {kind}"),
            description: format!("{sight}. Flight control advises caution: {warning}."),
            hazard_level: HAZARD_LADDER[rung].to_string(),
        }
    }
}

impl LoreSource for StarchartSource {
    fn fetch(&self, score: u64) -> Result<SectorLore, LoreError> {
        Ok(self.chart(score))
    }
}
