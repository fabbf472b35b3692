//! Game state and core simulation types
//!
//! A `GameState` is one play session: the arena, the player, every live
//! enemy and bullet, the score and the life-cycle phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, Size};
use crate::GameError;
use crate::consts::*;

/// Life-cycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player was hit; the session is frozen until reset
    GameOver,
}

/// Play field dimensions
///
/// Only constructible through [`Arena::new`], so a live arena is always
/// finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self, GameError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GameError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Size,
}

impl Player {
    /// Centered horizontally, `PLAYER_BOTTOM_MARGIN` above the arena bottom.
    /// Arenas too small for either never place the ship past the top-left.
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(
                ((arena.width() - PLAYER_WIDTH) / 2.0).max(0.0),
                (arena.height() - PLAYER_BOTTOM_MARGIN).max(0.0),
            ),
            size: Size::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Max x that keeps the whole ship inside the arena
    fn max_x(&self, arena: &Arena) -> f32 {
        (arena.width() - self.size.width).max(0.0)
    }

    /// Shift horizontally by `delta.x`, clamped to the arena. `delta.y` is
    /// ignored. Returns false (and leaves the ship alone) for non-finite input.
    pub fn apply_input(&mut self, delta: Vec2, arena: &Arena) -> bool {
        if !delta.x.is_finite() {
            return false;
        }
        self.pos.x = (self.pos.x + delta.x).clamp(0.0, self.max_x(arena));
        true
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Size,
    /// Units per tick, toward higher y
    pub speed: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Size::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            speed: ENEMY_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self, ticks: u32) {
        self.pos.y += self.speed * ticks as f32;
    }

    /// Fully below the arena
    pub fn is_out_of_bounds(&self, arena: &Arena) -> bool {
        self.pos.y > arena.height()
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Size,
    /// Units per tick, toward lower y
    pub speed: f32,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: Size::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self, ticks: u32) {
        self.pos.y -= self.speed * ticks as f32;
    }

    /// Past the top edge
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y < 0.0
    }
}

/// Read-only copy of everything presentation needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u64,
    pub phase: GamePhase,
    pub time_ticks: u64,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub arena: Arena,
    pub player: Player,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Live bullets in spawn order
    pub bullets: Vec<Bullet>,
    /// Enemies destroyed this session
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation ticks run while `Running`
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh running session for `arena`
    pub fn new(arena: Arena) -> Self {
        log::info!("New session, arena {}x{}", arena.width(), arena.height());
        Self {
            arena,
            player: Player::spawn(&arena),
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Validate dimensions and build a fresh session
    pub fn with_size(width: f32, height: f32) -> Result<Self, GameError> {
        Ok(Self::new(Arena::new(width, height)?))
    }

    /// Discard everything and start over in a (possibly resized) arena.
    ///
    /// On error the current session is left untouched.
    pub fn reset(&mut self, width: f32, height: f32) -> Result<(), GameError> {
        let arena = Arena::new(width, height)?;
        log::info!("Session reset (final score {})", self.score);
        *self = Self::new(arena);
        Ok(())
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Forward a drag delta to the player. Ignored once the game is over.
    pub fn apply_input(&mut self, delta: Vec2) {
        if !self.is_running() {
            return;
        }
        if !self.player.apply_input(delta, &self.arena) {
            log::warn!("Ignoring non-finite input delta {delta:?}");
        }
    }

    /// Enter `GameOver`. Repeated calls have no further effect.
    pub fn end(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            self.time_ticks,
            self.score
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: self.arena,
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            bullets: self.bullets.clone(),
            score: self.score,
            phase: self.phase,
            time_ticks: self.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::with_size(400.0, 800.0).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos, Vec2::new(175.0, 700.0));
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_rejects_bad_arena() {
        for (w, h) in [
            (0.0, 800.0),
            (400.0, 0.0),
            (-1.0, 800.0),
            (400.0, -5.0),
            (f32::NAN, 800.0),
            (400.0, f32::INFINITY),
        ] {
            assert!(
                matches!(
                    GameState::with_size(w, h),
                    Err(GameError::InvalidArena { .. })
                ),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn test_reset_failure_keeps_session() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.score = 7;
        assert!(state.reset(0.0, 800.0).is_err());
        assert_eq!(state.score, 7);
        assert_eq!(state.arena.width(), 400.0);
    }

    #[test]
    fn test_reset_resizes() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.reset(600.0, 1000.0).unwrap();
        assert_eq!(state.arena.width(), 600.0);
        assert_eq!(state.player.pos, Vec2::new(275.0, 900.0));
    }

    #[test]
    fn test_input_clamps_both_sides() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.apply_input(Vec2::new(-1000.0, 0.0));
        assert_eq!(state.player.pos.x, 0.0);
        state.apply_input(Vec2::new(1000.0, 0.0));
        assert_eq!(state.player.pos.x, 350.0);
        state.apply_input(Vec2::new(-10.0, 0.0));
        assert_eq!(state.player.pos.x, 340.0);
    }

    #[test]
    fn test_input_never_moves_vertically() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.apply_input(Vec2::new(5.0, -300.0));
        assert_eq!(state.player.pos.y, 700.0);
        assert_eq!(state.player.pos.x, 180.0);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.apply_input(Vec2::new(f32::NAN, 0.0));
        state.apply_input(Vec2::new(f32::INFINITY, 0.0));
        assert_eq!(state.player.pos.x, 175.0);
    }

    #[test]
    fn test_narrow_arena_pins_player() {
        // Arena narrower than the ship: x stays at 0
        let mut state = GameState::with_size(30.0, 800.0).unwrap();
        state.apply_input(Vec2::new(20.0, 0.0));
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn test_short_arena_keeps_player_on_screen() {
        let state = GameState::with_size(400.0, 60.0).unwrap();
        assert_eq!(state.player.pos, Vec2::new(175.0, 0.0));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut state = GameState::with_size(400.0, 800.0).unwrap();
        state.end();
        state.end();
        assert!(state.is_game_over());
    }

    #[test]
    fn test_entity_motion() {
        let mut enemy = Enemy::new(1, Vec2::new(0.0, -50.0));
        enemy.advance(10);
        assert_eq!(enemy.pos.y, -20.0);

        let mut bullet = Bullet::new(2, Vec2::new(0.0, 700.0));
        bullet.advance(5);
        assert_eq!(bullet.pos.y, 660.0);
    }
}
