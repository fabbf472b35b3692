//! Fixed-timestep game driver
//!
//! Owns one session plus the clock that feeds it: a frame accumulator for
//! simulation ticks and two spawn timers. Everything runs on the caller's
//! thread, so input, spawns and ticks are serialized by construction.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::GameError;
use crate::consts::MAX_FRAME_DT;
use crate::settings::Settings;
use crate::sim::{GameState, Snapshot, tick};

/// A running game: session, seeded RNG and timers
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    settings: Settings,
    rng: Pcg32,
    /// Unsimulated frame time (seconds)
    accumulator: f32,
    /// Spawn timers, in microseconds of simulated time
    tick_us: u64,
    enemy_elapsed_us: u64,
    bullet_elapsed_us: u64,
    /// Drag deltas received since the last tick
    pending_input: Vec2,
}

impl Game {
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let state = GameState::new(settings.arena()?);
        let tick_us = settings.tick_us();
        Ok(Self {
            state,
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            accumulator: 0.0,
            tick_us,
            enemy_elapsed_us: 0,
            bullet_elapsed_us: 0,
            pending_input: Vec2::ZERO,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Queue a drag delta; it is applied whole at the start of the next tick
    pub fn queue_input(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            log::warn!("Dropping non-finite input delta {delta:?}");
            return;
        }
        self.pending_input += delta;
    }

    /// Run as many fixed ticks as `dt` seconds of frame time allows.
    ///
    /// Returns the number of ticks run. Stops for good once the game is
    /// over, until [`Game::restart`].
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.state.is_game_over() {
            return 0;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let tick_dt = self.settings.tick_dt();
        let mut substeps = 0;
        while self.accumulator >= tick_dt && substeps < self.settings.max_substeps {
            self.step();
            self.accumulator -= tick_dt;
            substeps += 1;

            if self.state.is_game_over() {
                self.accumulator = 0.0;
                break;
            }
        }

        // Spiral of death: drop what we could not catch up on
        if substeps == self.settings.max_substeps {
            self.accumulator = self.accumulator.min(tick_dt);
        }

        substeps
    }

    /// Exactly one tick: input, due spawns, then the simulation step
    pub fn step(&mut self) {
        if self.state.is_game_over() {
            return;
        }

        let delta = std::mem::take(&mut self.pending_input);
        if delta != Vec2::ZERO {
            self.state.apply_input(delta);
        }

        let enemy_interval_us = u64::from(self.settings.enemy_spawn_interval_ms) * 1000;
        self.enemy_elapsed_us = self.enemy_elapsed_us.saturating_add(self.tick_us);
        while self.enemy_elapsed_us >= enemy_interval_us {
            self.enemy_elapsed_us -= enemy_interval_us;
            self.state.spawn_enemy(&mut self.rng);
        }

        let bullet_interval_us = u64::from(self.settings.bullet_spawn_interval_ms) * 1000;
        self.bullet_elapsed_us = self.bullet_elapsed_us.saturating_add(self.tick_us);
        while self.bullet_elapsed_us >= bullet_interval_us {
            self.bullet_elapsed_us -= bullet_interval_us;
            self.state.spawn_bullet();
        }

        tick(&mut self.state);
    }

    /// Fresh session in a (possibly resized) arena with timers rewound.
    ///
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn restart(&mut self, width: f32, height: f32) -> Result<(), GameError> {
        self.state.reset(width, height)?;
        self.settings.arena_width = width;
        self.settings.arena_height = height;
        self.accumulator = 0.0;
        self.enemy_elapsed_us = 0;
        self.bullet_elapsed_us = 0;
        self.pending_input = Vec2::ZERO;
        Ok(())
    }
}
