//! Core types and definitions for the Nebula Voyager simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, commands, events, lore records, world state, and constants.
//! It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod lore;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
