//! Nebula Voyager desktop entry point: window setup and the frame loop.
//!
//! One simulation tick runs per rendered frame, matching the display
//! refresh the scoring model assumes. The lore client is the only thing
//! that outlives a frame; everything else is polled fresh each pass.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use nebula_core::enums::GamePhase;
use nebula_core::events::SimEvent;
use nebula_core::lore::SectorLore;
use nebula_core::types::Viewport;
use nebula_lore::{LoreClient, StarchartSource};
use nebula_sim::{SimConfig, SimulationEngine};

use nebula_app::input::{self, PointerTracker};
use nebula_app::overlay;
use nebula_app::profile;
use nebula_app::render;

fn window_conf() -> Conf {
    Conf {
        window_title: "Nebula Voyager".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

/// Wall-clock seed so every launch flies a different asteroid field.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(42)
}

fn current_viewport() -> Viewport {
    Viewport {
        width: f64::from(screen_width()),
        height: f64::from(screen_height()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut engine = SimulationEngine::new(SimConfig {
        seed: clock_seed(),
        viewport: current_viewport(),
    });
    let mut lore = LoreClient::new(Arc::new(StarchartSource::new()));
    let mut tracker = PointerTracker::new();
    let mut high_score = profile::load_high_score();
    let mut sector_lore: Option<SectorLore> = None;

    loop {
        engine.set_viewport(current_viewport());
        if let Some(target_y) = tracker.target_y(input::sample_pointer()) {
            engine.set_target_y(target_y);
        }

        let phase_before = engine.phase();
        for event in engine.tick() {
            match event {
                SimEvent::GameOver { score } => {
                    log::info!("run ended at {score} LY");
                    if score > high_score {
                        high_score = score;
                        profile::store_high_score(score);
                    }
                }
                SimEvent::SectorComplete { score } => {
                    lore.request(score);
                }
            }
        }

        // Leaving the sector break stales any outstanding lore request.
        if phase_before == GamePhase::SectorBreak && engine.phase() != GamePhase::SectorBreak {
            lore.invalidate();
            sector_lore = None;
        }
        if let Some(record) = lore.poll() {
            sector_lore = Some(record);
        }

        render::draw_world(engine.world());

        let command = match engine.phase() {
            GamePhase::Menu => overlay::draw_menu(high_score),
            GamePhase::Playing => {
                overlay::draw_hud(engine.score(), engine.difficulty());
                None
            }
            GamePhase::SectorBreak => overlay::draw_sector_break(sector_lore.as_ref()),
            GamePhase::GameOver => overlay::draw_game_over(engine.score(), high_score),
        };
        if let Some(command) = command {
            engine.queue_command(command);
        }

        next_frame().await;
    }
}
