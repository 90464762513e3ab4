//! Lore gateway for Nebula Voyager.
//!
//! Defines the source contract for sector flavor text, a threaded client
//! that keeps the render loop unblocked while a request settles, and the
//! shipped offline source. Every failure path resolves to the fixed
//! fallback record; callers never see an error.

pub mod client;
pub mod source;
pub mod starchart;

pub use client::LoreClient;
pub use source::{parse_payload, LoreError, LoreSource};
pub use starchart::StarchartSource;

#[cfg(test)]
mod tests;
