//! Error types
//!
//! The simulation itself cannot fail once a session exists. Errors only come
//! from building a session (bad arena) or loading settings.

/// Errors surfaced by session construction and settings loading
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Arena dimensions must be finite and strictly positive
    #[error("invalid arena {width}x{height}: dimensions must be finite and > 0")]
    InvalidArena { width: f32, height: f32 },

    /// Any other rejected setting (tick rate, spawn intervals, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file was not valid JSON
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
