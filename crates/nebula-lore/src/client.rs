//! Threaded lore client with stale-response protection.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use nebula_core::lore::SectorLore;

use crate::source::LoreSource;

/// Runs lore requests off the render thread and hands back settled records.
///
/// Each request carries a generation token. The driver calls [`invalidate`]
/// on every phase change away from the sector break; a response that settles
/// under an older generation is discarded on arrival instead of being shown
/// for the wrong sector.
///
/// [`invalidate`]: LoreClient::invalidate
pub struct LoreClient {
    source: Arc<dyn LoreSource>,
    generation: u64,
    pending: Option<Pending>,
}

struct Pending {
    generation: u64,
    rx: Receiver<SectorLore>,
}

impl LoreClient {
    pub fn new(source: Arc<dyn LoreSource>) -> Self {
        Self {
            source,
            generation: 0,
            pending: None,
        }
    }

    /// Kick off a request for the sector reached at `score`. Replaces any
    /// request still in flight; the replaced result will fail the generation
    /// check when it lands.
    pub fn request(&mut self, score: u64) {
        self.generation += 1;
        let (tx, rx) = mpsc::channel();
        let worker_tx = tx.clone();
        let source = Arc::clone(&self.source);

        let spawned = thread::Builder::new()
            .name("lore-fetch".into())
            .spawn(move || {
                let lore = source.fetch(score).unwrap_or_else(|err| {
                    log::warn!("lore request for score {score} failed: {err}; using fallback");
                    SectorLore::fallback()
                });
                let _ = worker_tx.send(lore);
            });
        if let Err(err) = spawned {
            log::warn!("could not spawn lore worker: {err}; settling with fallback");
            let _ = tx.send(SectorLore::fallback());
        }

        self.pending = Some(Pending {
            generation: self.generation,
            rx,
        });
    }

    /// Poll for a settled record. Returns it at most once, and only while
    /// the request that produced it is still current.
    pub fn poll(&mut self) -> Option<SectorLore> {
        let pending = self.pending.as_ref()?;
        let stale = pending.generation != self.generation;
        match pending.rx.try_recv() {
            Ok(lore) => {
                self.pending = None;
                if stale {
                    log::debug!("discarding stale lore response");
                    None
                } else {
                    Some(lore)
                }
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending; treat it as a failed fetch.
                self.pending = None;
                if stale {
                    None
                } else {
                    Some(SectorLore::fallback())
                }
            }
        }
    }

    /// Mark any in-flight request stale. Called on every phase change away
    /// from the sector break.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// True while the current request is awaiting settlement.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |p| p.generation == self.generation)
    }
}
