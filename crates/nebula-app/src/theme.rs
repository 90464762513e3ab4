//! UI palette and conversions from the simulation's color type.

use macroquad::prelude::Color;

use nebula_core::types::Rgb;

/// Convert a simulation palette entry to a render color.
pub fn color(rgb: Rgb) -> Color {
    Color::new(
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
        1.0,
    )
}

/// Same color with a different alpha.
pub fn with_alpha(base: Color, alpha: f32) -> Color {
    Color::new(base.r, base.g, base.b, alpha)
}

/// Thruster glow behind the ship.
pub const THRUSTER: Color = Color::new(0.973, 0.443, 0.443, 1.0);
/// Dimmed full-screen scrim behind the menu.
pub const SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.6);
/// Heavier scrim behind the sector-break panel.
pub const SCRIM_HEAVY: Color = Color::new(0.0, 0.0, 0.0, 0.8);
/// Red-tinted scrim for the failure screen.
pub const SCRIM_FAILURE: Color = Color::new(0.271, 0.039, 0.039, 0.35);
/// Panel background.
pub const PANEL: Color = Color::new(0.059, 0.090, 0.165, 0.92);
/// Inset box inside a panel.
pub const PANEL_INSET: Color = Color::new(0.008, 0.024, 0.090, 0.6);
/// Panel border, sky tint.
pub const PANEL_BORDER: Color = Color::new(0.220, 0.741, 0.973, 0.4);
/// Panel border on the failure screen.
pub const PANEL_BORDER_DANGER: Color = Color::new(0.937, 0.267, 0.267, 0.4);
/// Primary text.
pub const TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Secondary text.
pub const TEXT_BODY: Color = Color::new(0.796, 0.835, 0.882, 1.0);
/// Dim labels.
pub const TEXT_DIM: Color = Color::new(0.580, 0.639, 0.722, 1.0);
/// Sky accent for headings and the personal best line.
pub const ACCENT: Color = Color::new(0.220, 0.741, 0.973, 1.0);
/// Danger red for the failure heading and hazard badge.
pub const DANGER: Color = Color::new(0.937, 0.267, 0.267, 1.0);
/// Record-banner yellow.
pub const RECORD: Color = Color::new(0.980, 0.800, 0.082, 1.0);
/// Primary button fill.
pub const BUTTON: Color = Color::new(0.008, 0.518, 0.780, 1.0);
/// Primary button fill while hovered.
pub const BUTTON_HOVER: Color = Color::new(0.055, 0.647, 0.914, 1.0);
/// Light button fill (restart).
pub const BUTTON_LIGHT: Color = Color::new(0.945, 0.961, 0.976, 1.0);
/// Light button fill while hovered.
pub const BUTTON_LIGHT_HOVER: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Text on the light button.
pub const TEXT_ON_LIGHT: Color = Color::new(0.059, 0.090, 0.165, 1.0);
