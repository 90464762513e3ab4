//! Fundamental geometric and display types.

use serde::{Deserialize, Serialize};

/// 2D vector in viewport space (pixels). x grows rightward, y grows downward.
pub use glam::DVec2 as Vec2;

/// RGB display color. Carried on entities but never read by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray at the given level.
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// Viewport dimensions in pixels. The simulation uses these for spawn
/// positions, star wrapping, and the player's vertical center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Vertical center, the player's default lane.
    pub fn center_y(&self) -> f64 {
        self.height * 0.5
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_VIEWPORT_WIDTH,
            height: crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}
