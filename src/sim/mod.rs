//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, Size, overlaps};
pub use spawn::SpawnRng;
pub use state::{Arena, Bullet, Enemy, GamePhase, GameState, Player, Snapshot};
pub use tick::{player_is_hit, resolve_bullet_hits, tick};
