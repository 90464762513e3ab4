//! HUD and phase overlays, drawn in immediate mode over the scene.
//!
//! Each overlay returns the command its buttons produced this frame, if
//! any; the frame loop queues it on the engine. Layout helpers are split
//! out so hit boxes can be checked without a window.

use macroquad::prelude::*;

use nebula_core::commands::PlayerCommand;
use nebula_core::lore::SectorLore;

use crate::input;
use crate::theme;

/// Characters per line when wrapping lore descriptions.
const LORE_WRAP: usize = 52;

/// Axis-aligned rectangle for layout and hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect2 {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centered on a point.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Start-button placement on the main menu.
pub fn menu_layout(screen_w: f32, screen_h: f32) -> Rect2 {
    Rect2::centered(screen_w / 2.0, screen_h / 2.0 + 140.0, 320.0, 56.0)
}

/// Resume-button placement on the sector-break panel.
pub fn sector_break_layout(screen_w: f32, screen_h: f32) -> Rect2 {
    Rect2::centered(screen_w / 2.0, screen_h / 2.0 + 150.0, 320.0, 56.0)
}

/// Restart and return-to-base placements on the failure screen.
pub fn game_over_layout(screen_w: f32, screen_h: f32) -> (Rect2, Rect2) {
    let restart = Rect2::centered(screen_w / 2.0, screen_h / 2.0 + 120.0, 300.0, 52.0);
    let back = Rect2::centered(screen_w / 2.0, screen_h / 2.0 + 185.0, 300.0, 40.0);
    (restart, back)
}

/// Greedy word wrap by character budget per line. A single word longer
/// than the budget gets a line of its own rather than being split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// In-flight HUD: distance flown and the current hazard percentage.
pub fn draw_hud(score: u64, difficulty: f64) {
    draw_text("DISTANCE", 24.0, 40.0, 20.0, theme::ACCENT);
    draw_text(&format!("{score} LY"), 24.0, 80.0, 44.0, theme::TEXT);
    let hazard = (difficulty * 100.0).round() as i64;
    draw_text(&format!("Hazard: {hazard}%"), 24.0, 108.0, 20.0, theme::TEXT_DIM);
}

/// Main menu overlay.
pub fn draw_menu(high_score: u64) -> Option<PlayerCommand> {
    let (sw, sh) = (screen_width(), screen_height());
    let (cx, cy) = (sw / 2.0, sh / 2.0);
    let press = input::primary_press();

    draw_rectangle(0.0, 0.0, sw, sh, theme::SCRIM);
    panel(Rect2::centered(cx, cy, 460.0, 440.0), theme::PANEL_BORDER);

    text_centered("NEBULA", cx, cy - 130.0, 88.0, theme::ACCENT);
    text_centered("V O Y A G E R", cx, cy - 85.0, 32.0, theme::TEXT_BODY);
    text_centered(
        "Move your mouse or finger to pilot the ship.",
        cx,
        cy - 20.0,
        20.0,
        theme::TEXT_DIM,
    );
    text_centered(
        "Dodge asteroids and survive as long as possible.",
        cx,
        cy + 10.0,
        20.0,
        theme::TEXT_DIM,
    );
    if high_score > 0 {
        text_centered(
            &format!("PERSONAL BEST: {high_score} LY"),
            cx,
            cy + 64.0,
            18.0,
            theme::ACCENT,
        );
    }

    let start = menu_layout(sw, sh);
    if button("INITIATE JUMP", start, theme::BUTTON, theme::BUTTON_HOVER, theme::TEXT, press) {
        return Some(PlayerCommand::StartGame);
    }
    None
}

/// Sector-break overlay. While the lore request is still in flight this
/// shows a scanning indicator and withholds the resume button.
pub fn draw_sector_break(lore: Option<&SectorLore>) -> Option<PlayerCommand> {
    let (sw, sh) = (screen_width(), screen_height());
    let (cx, cy) = (sw / 2.0, sh / 2.0);
    let press = input::primary_press();

    draw_rectangle(0.0, 0.0, sw, sh, theme::SCRIM_HEAVY);
    panel(Rect2::centered(cx, cy, 580.0, 470.0), theme::PANEL_BORDER);
    text_centered("NEW SECTOR DISCOVERED", cx, cy - 180.0, 18.0, theme::ACCENT);

    let Some(lore) = lore else {
        spinner(cx, cy - 40.0);
        let pulse = 0.5 + 0.5 * (get_time() as f32 * 3.0).sin().abs();
        text_centered(
            "SCANNING DEEP SPACE...",
            cx,
            cy + 40.0,
            20.0,
            theme::with_alpha(theme::TEXT_DIM, pulse),
        );
        return None;
    };

    text_centered(&lore.name, cx, cy - 110.0, 44.0, theme::TEXT);
    text_centered(
        &format!("HAZARD: {}", lore.hazard_level),
        cx,
        cy - 70.0,
        18.0,
        theme::DANGER,
    );
    let quoted = format!("\"{}\"", lore.description);
    for (i, line) in wrap_text(&quoted, LORE_WRAP).iter().enumerate() {
        text_centered(line, cx, cy - 20.0 + i as f32 * 28.0, 22.0, theme::TEXT_BODY);
    }

    let resume = sector_break_layout(sw, sh);
    if button("CONTINUE FLIGHT", resume, theme::BUTTON, theme::BUTTON_HOVER, theme::TEXT, press) {
        return Some(PlayerCommand::Resume);
    }
    None
}

/// Failure overlay after a collision.
pub fn draw_game_over(score: u64, high_score: u64) -> Option<PlayerCommand> {
    let (sw, sh) = (screen_width(), screen_height());
    let (cx, cy) = (sw / 2.0, sh / 2.0);
    let press = input::primary_press();

    draw_rectangle(0.0, 0.0, sw, sh, theme::SCRIM_FAILURE);
    panel(Rect2::centered(cx, cy, 420.0, 470.0), theme::PANEL_BORDER_DANGER);

    text_centered("SYSTEM FAILURE", cx, cy - 160.0, 48.0, theme::DANGER);
    text_centered("SHIP DESTROYED IN DEEP SPACE", cx, cy - 125.0, 18.0, theme::TEXT_DIM);

    let tally = Rect2::centered(cx, cy - 40.0, 340.0, 110.0);
    draw_rectangle(tally.x, tally.y, tally.w, tally.h, theme::PANEL_INSET);
    text_centered("TOTAL DISTANCE", cx, cy - 68.0, 16.0, theme::TEXT_DIM);
    text_centered(&format!("{score} LY"), cx, cy - 22.0, 44.0, theme::TEXT);

    if score > 0 && score >= high_score {
        text_centered("NEW GALACTIC RECORD!", cx, cy + 60.0, 20.0, theme::RECORD);
    }

    let (restart, back) = game_over_layout(sw, sh);
    if button(
        "RESTART MISSION",
        restart,
        theme::BUTTON_LIGHT,
        theme::BUTTON_LIGHT_HOVER,
        theme::TEXT_ON_LIGHT,
        press,
    ) {
        return Some(PlayerCommand::Restart);
    }
    if text_button("RETURN TO BASE", back, press) {
        return Some(PlayerCommand::ReturnToMenu);
    }
    None
}

fn panel(area: Rect2, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, theme::PANEL);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 2.0, border);
}

fn text_centered(text: &str, cx: f32, baseline_y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, baseline_y, size, color);
}

/// Draw a filled button; true when pressed this frame.
fn button(
    label: &str,
    area: Rect2,
    fill: Color,
    hover: Color,
    text_color: Color,
    press: Option<(f32, f32)>,
) -> bool {
    let (mx, my) = mouse_position();
    let current = if area.contains(mx, my) { hover } else { fill };
    draw_rectangle(area.x, area.y, area.w, area.h, current);
    text_centered(label, area.x + area.w / 2.0, area.y + area.h / 2.0 + 8.0, 26.0, text_color);
    press.map_or(false, |(px, py)| area.contains(px, py))
}

/// Text-only button that brightens on hover; true when pressed this frame.
fn text_button(label: &str, area: Rect2, press: Option<(f32, f32)>) -> bool {
    let (mx, my) = mouse_position();
    let color = if area.contains(mx, my) {
        theme::TEXT
    } else {
        theme::TEXT_DIM
    };
    text_centered(label, area.x + area.w / 2.0, area.y + area.h / 2.0 + 6.0, 18.0, color);
    press.map_or(false, |(px, py)| area.contains(px, py))
}

/// Orbiting-dot loading indicator.
fn spinner(cx: f32, cy: f32) {
    draw_poly_lines(cx, cy, 32, 26.0, 0.0, 2.0, theme::with_alpha(theme::ACCENT, 0.25));
    let angle = get_time() as f32 * 4.0;
    draw_circle(cx + angle.cos() * 26.0, cy + angle.sin() * 26.0, 5.0, theme::ACCENT);
}
