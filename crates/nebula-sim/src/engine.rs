//! Simulation engine: phase machine, command queue, and the per-tick
//! system pipeline.
//!
//! `SimulationEngine` owns the entity world, processes player commands, runs
//! the ordered per-tick systems while the session is live, and returns the
//! events each tick produced. The driving application schedules `tick` once
//! per display refresh and reacts to the events (high score, lore requests).

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nebula_core::commands::PlayerCommand;
use nebula_core::constants::{BASE_DIFFICULTY, DIFFICULTY_STEP, SECTOR_LENGTH};
use nebula_core::enums::GamePhase;
use nebula_core::events::SimEvent;
use nebula_core::state::World;
use nebula_core::types::Viewport;

use crate::spawn;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial viewport dimensions.
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
        }
    }
}

/// The simulation engine. Owns the entity world and all session state.
pub struct SimulationEngine {
    world: World,
    phase: GamePhase,
    score: u64,
    difficulty: f64,
    next_sector_at: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Starts in the
    /// menu phase with a seeded starfield as backdrop.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new(config.viewport);
        world.stars = spawn::starfield(&mut rng, config.viewport);
        Self {
            world,
            phase: GamePhase::default(),
            score: 0,
            difficulty: BASE_DIFFICULTY,
            next_sector_at: SECTOR_LENGTH,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Overwrite the ship's steering target. Called directly by the input
    /// adapter whenever a pointer reading arrives; last write wins.
    pub fn set_target_y(&mut self, y: f64) {
        self.world.player.target_y = y;
    }

    /// Update the viewport dimensions (window resize or first report).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.world.viewport = viewport;
    }

    /// Advance the simulation by one tick and return the events it produced.
    /// Outside the Playing phase this only drains the command queue; the
    /// world is untouched.
    pub fn tick(&mut self) -> Vec<SimEvent> {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        for event in &events {
            self.apply_event(*event);
        }
        events
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current score (ticks survived this session).
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Get the current difficulty multiplier.
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Get a read-only reference to the entity world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Insert an asteroid at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_asteroid(
        &mut self,
        pos: nebula_core::types::Vec2,
        radius: f64,
        velocity: nebula_core::types::Vec2,
    ) -> u32 {
        use nebula_core::constants::DEBRIS_COLOR;
        use nebula_core::entities::{Asteroid, Body};
        use nebula_core::state::alloc_id;

        let id = alloc_id(&mut self.world.next_id);
        self.world.asteroids.push(Asteroid {
            id,
            body: Body {
                pos,
                radius,
                velocity,
                color: DEBRIS_COLOR,
            },
            rotation: 0.0,
            rotation_speed: 0.0,
            points: radius.floor() as u32,
        });
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that do not apply to the
    /// current phase are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.reset_session();
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.reset_session();
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::SectorBreak {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::Menu;
                }
            }
        }
    }

    /// Reset all session state for a fresh run. Keeps the viewport, reseeds
    /// the starfield, recenters the player.
    fn reset_session(&mut self) {
        let viewport = self.world.viewport;
        self.world = World::new(viewport);
        self.world.stars = spawn::starfield(&mut self.rng, viewport);
        self.score = 0;
        self.difficulty = BASE_DIFFICULTY;
        self.next_sector_at = SECTOR_LENGTH;
    }

    /// Apply the phase transition implied by a drained event.
    fn apply_event(&mut self, event: SimEvent) {
        match event {
            SimEvent::GameOver { .. } => {
                self.phase = GamePhase::GameOver;
            }
            SimEvent::SectorComplete { .. } => {
                self.phase = GamePhase::SectorBreak;
                self.difficulty += DIFFICULTY_STEP;
            }
        }
    }

    /// Run the per-tick systems in their fixed order.
    fn run_systems(&mut self) {
        // 1. Background star scroll
        systems::starfield::run(&mut self.world);
        // 2. Player steering toward the pointer target
        systems::steering::run(&mut self.world);
        // 3. Particle integration and cull
        systems::particles::run(&mut self.world);
        // 4. Asteroid integration, collision, cull
        let collided = systems::asteroids::run(
            &mut self.world,
            &mut self.rng,
            &mut self.events,
            self.score,
        );
        if collided {
            // Session over: scoring, sector check, and spawning skip this tick.
            return;
        }
        // 5. Distance scoring, one unit per tick
        self.score += 1;
        // 6. Sector threshold check
        if self.score >= self.next_sector_at {
            self.next_sector_at += SECTOR_LENGTH;
            self.events.push(SimEvent::SectorComplete { score: self.score });
        }
        // 7. Opportunistic asteroid spawn
        systems::spawner::run(&mut self.world, &mut self.rng, self.difficulty);
    }
}
