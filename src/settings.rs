//! Game settings
//!
//! Arena size, RNG seed and the three clock cadences. Loaded from JSON;
//! any field left out falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::*;
use crate::sim::Arena;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena dimensions
    pub arena_width: f32,
    pub arena_height: f32,

    /// Run seed for spawn placement
    pub seed: u64,

    // === Clock ===
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
    /// Maximum ticks run per `update` call
    pub max_substeps: u32,

    // === Spawning ===
    pub enemy_spawn_interval_ms: u32,
    pub bullet_spawn_interval_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            seed: 0,
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            bullet_spawn_interval_ms: BULLET_SPAWN_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings no session could run with
    pub fn validate(&self) -> Result<(), GameError> {
        self.arena()?;
        if self.max_substeps == 0 {
            return Err(GameError::InvalidConfiguration(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        if self.enemy_spawn_interval_ms == 0 || self.bullet_spawn_interval_ms == 0 {
            return Err(GameError::InvalidConfiguration(
                "spawn intervals must be at least 1 ms".to_string(),
            ));
        }
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(GameError::InvalidConfiguration(format!(
                "tick_rate_hz must be > 0, got {}",
                self.tick_rate_hz
            )));
        }
        // A tick must last at least 1 us and fire each spawn timer at most once
        let tick_us = 1_000_000.0 / f64::from(self.tick_rate_hz);
        let shortest_interval_us =
            u64::from(self.enemy_spawn_interval_ms.min(self.bullet_spawn_interval_ms)) * 1000;
        if tick_us < 1.0 || tick_us.round() > shortest_interval_us as f64 {
            return Err(GameError::InvalidConfiguration(format!(
                "tick_rate_hz {} gives a {tick_us:.0} us tick, allowed 1..={shortest_interval_us}",
                self.tick_rate_hz
            )));
        }
        Ok(())
    }

    /// Validated arena from the configured dimensions
    pub fn arena(&self) -> Result<Arena, GameError> {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    /// Microseconds per simulation tick (whole, at least 1)
    pub fn tick_us(&self) -> u64 {
        ((1_000_000.0 / f64::from(self.tick_rate_hz)).round() as u64).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.enemy_spawn_interval_ms, 1000);
        assert_eq!(settings.bullet_spawn_interval_ms, 300);
        assert!((settings.tick_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "arena_width": 600 }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.arena_width, 600.0);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_rejects_bad_arena() {
        let err = Settings::from_json(r#"{ "arena_height": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidArena { .. }));
    }

    #[test]
    fn test_rejects_bad_timing() {
        for json in [
            r#"{ "tick_rate_hz": 0 }"#,
            r#"{ "max_substeps": 0 }"#,
            r#"{ "enemy_spawn_interval_ms": 0 }"#,
            // Slower than any spawn cadence
            r#"{ "tick_rate_hz": 1e-14, "enemy_spawn_interval_ms": 4294967295, "bullet_spawn_interval_ms": 4294967295 }"#,
            r#"{ "tick_rate_hz": 1.0 }"#,
            // Sub-microsecond ticks
            r#"{ "tick_rate_hz": 5e6 }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(
                matches!(err, GameError::InvalidConfiguration(_)),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_tick_rate_bounds() {
        let slowest = Settings {
            tick_rate_hz: 1000.0 / 300.0,
            ..Default::default()
        };
        assert!(slowest.validate().is_ok());
        assert_eq!(slowest.tick_us(), 300_000);

        let fastest = Settings {
            tick_rate_hz: 1_000_000.0,
            ..Default::default()
        };
        assert!(fastest.validate().is_ok());
        assert_eq!(fastest.tick_us(), 1);

        assert_eq!(Settings::default().tick_us(), 16_667);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
