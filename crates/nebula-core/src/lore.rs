//! Sector flavor records returned by the lore gateway.

use serde::{Deserialize, Serialize};

/// Narrative record for a newly discovered sector. Immutable once received.
///
/// Wire payloads use camelCase field names (`hazardLevel`); unknown extra
/// fields are tolerated by the parser, missing or mistyped ones are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorLore {
    /// Sector name, e.g. "The Cygnus Shallows".
    pub name: String,
    /// One or two sentences of atmosphere.
    pub description: String,
    /// Hazard classification string, e.g. "MODERATE".
    pub hazard_level: String,
}

impl SectorLore {
    /// Fixed record substituted when a lore request fails for any reason.
    /// Never changes; tests and the sector-break screen rely on it verbatim.
    pub fn fallback() -> Self {
        Self {
            name: "The Silent Void".to_string(),
            description: "Communications are jammed. You are alone in the darkness.".to_string(),
            hazard_level: "UNKNOWN".to_string(),
        }
    }
}
