//! The lore service contract: source trait, errors, payload parsing.

use nebula_core::lore::SectorLore;
use thiserror::Error;

/// Errors a lore source can produce. All of them resolve to the fallback
/// record at the client boundary; none propagate past it.
#[derive(Debug, Error)]
pub enum LoreError {
    /// The service could not be reached or dropped the connection.
    #[error("lore transmission failed: {0}")]
    Transport(String),
    /// The response did not match the three-string-field contract.
    #[error("malformed lore payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The source gave up on its own deadline.
    #[error("lore request timed out")]
    TimedOut,
}

/// A provider of sector lore. The request carries the current score as its
/// sole context. `fetch` may block; the client always calls it from a worker
/// thread, so a slow source only delays its own result.
pub trait LoreSource: Send + Sync + 'static {
    fn fetch(&self, score: u64) -> Result<SectorLore, LoreError>;
}

/// Parse a wire payload against the contract: a JSON object with the three
/// string fields, camelCase `hazardLevel`. Unknown extra fields are
/// tolerated; a missing or mistyped field is `Malformed`.
pub fn parse_payload(raw: &str) -> Result<SectorLore, LoreError> {
    let lore: SectorLore = serde_json::from_str(raw.trim())?;
    Ok(lore)
}
