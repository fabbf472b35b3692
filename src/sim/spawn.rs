//! Enemy and bullet spawning
//!
//! Both triggers are driven by an external timer and do nothing once the
//! session is over.

use glam::Vec2;

use super::state::{Bullet, Enemy, GameState};
use crate::consts::*;

/// Source of spawn placement randomness
///
/// Every `rand::Rng` qualifies; tests can plug in fixed values.
pub trait SpawnRng {
    /// Uniform sample in `[0, 1)`
    fn unit(&mut self) -> f32;
}

impl<R: rand::Rng> SpawnRng for R {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl GameState {
    /// Drop a new enemy at a random column just above the visible top.
    ///
    /// Returns the new enemy's id, or `None` if the game is over.
    pub fn spawn_enemy(&mut self, rng: &mut impl SpawnRng) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let x = rng.unit() * self.arena.width();
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, Vec2::new(x, ENEMY_SPAWN_Y)));
        log::debug!("Spawned enemy {id} at x={x:.1}");
        Some(id)
    }

    /// Fire a bullet from the player's muzzle.
    ///
    /// Returns the new bullet's id, or `None` if the game is over.
    pub fn spawn_bullet(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        let pos = self.player.pos + Vec2::new(MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y);
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, pos));
        log::trace!("Spawned bullet {id} at {pos:?}");
        Some(id)
    }
}
