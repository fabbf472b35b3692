//! Skyfall - A minimal arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `game`: Fixed-timestep driver that owns a session and its timers
//! - `autopilot`: Demo steering policy for headless runs
//! - `settings`: Data-driven game configuration

pub mod autopilot;
pub mod error;
pub mod game;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Reference simulation rate (ticks per second)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Fixed simulation timestep at the reference rate
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Distance from the arena bottom to the player's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    /// Units per tick, downward
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Spawn row, just above the visible top
    pub const ENEMY_SPAWN_Y: f32 = -50.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 20.0;
    /// Units per tick, upward
    pub const BULLET_SPEED: f32 = 8.0;
    /// Muzzle offset from the player's position
    pub const MUZZLE_OFFSET_X: f32 = 24.0;
    pub const MUZZLE_OFFSET_Y: f32 = 0.0;

    /// Reference spawn cadences
    pub const ENEMY_SPAWN_INTERVAL_MS: u32 = 1000;
    pub const BULLET_SPAWN_INTERVAL_MS: u32 = 300;
}
