//! Demo autopilot
//!
//! Produces drag deltas the same way a player's finger would, so headless
//! runs exercise the real input path. Dodges enemies about to land on the
//! ship, otherwise lines the muzzle up under the lowest enemy.

use glam::Vec2;

use crate::consts::{BULLET_WIDTH, MUZZLE_OFFSET_X};
use crate::sim::{Enemy, GameState};

/// How far above the ship an enemy counts as an immediate threat
const DANGER_DISTANCE: f32 = 120.0;
/// Extra horizontal clearance kept from threats
const DODGE_MARGIN: f32 = 10.0;

/// Horizontal delta for this tick, at most `max_speed` in either direction
pub fn steer(state: &GameState, max_speed: f32) -> Vec2 {
    let player = state.player.rect();
    let arena_width = state.arena.width();

    let threat = state
        .enemies
        .iter()
        .filter(|e| {
            let r = e.rect();
            r.left() < player.right() + DODGE_MARGIN
                && player.left() - DODGE_MARGIN < r.right()
                && r.bottom() > player.top() - DANGER_DISTANCE
                && r.top() < player.bottom()
        })
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let dx = if let Some(enemy) = threat {
        dodge(state, enemy, arena_width)
    } else if let Some(target) = lowest_target(state) {
        let muzzle = state.player.pos.x + MUZZLE_OFFSET_X + BULLET_WIDTH / 2.0;
        let center = target.pos.x + target.size.width / 2.0;
        center - muzzle
    } else {
        // Nothing to do: drift back to the middle
        (arena_width - player.size.width) / 2.0 - state.player.pos.x
    };

    Vec2::new(dx.clamp(-max_speed, max_speed), 0.0)
}

/// Lowest enemy still above the ship
fn lowest_target(state: &GameState) -> Option<&Enemy> {
    let player_top = state.player.pos.y;
    state
        .enemies
        .iter()
        .filter(|e| e.rect().bottom() <= player_top)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}

/// Move away from `enemy`, turning around when pinned against a wall
fn dodge(state: &GameState, enemy: &Enemy, arena_width: f32) -> f32 {
    let player = state.player.rect();
    let player_center = (player.left() + player.right()) / 2.0;
    let enemy_center = enemy.pos.x + enemy.size.width / 2.0;

    let mut dir = if player_center < enemy_center { -1.0 } else { 1.0 };
    let pinned_left = dir < 0.0 && player.left() <= 0.0;
    let pinned_right = dir > 0.0 && player.right() >= arena_width;
    if pinned_left || pinned_right {
        dir = -dir;
    }
    dir * f32::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameState {
        GameState::with_size(400.0, 800.0).unwrap()
    }

    fn enemy_at(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, Vec2::new(x, y)));
    }

    #[test]
    fn test_idle_when_centered() {
        let state = session();
        assert_eq!(steer(&state, 6.0), Vec2::ZERO);
    }

    #[test]
    fn test_lines_up_shot() {
        let mut state = session();
        enemy_at(&mut state, 300.0, 100.0);
        let delta = steer(&state, 6.0);
        assert_eq!(delta, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_dodges_close_enemy() {
        let mut state = session();
        // Just above and slightly right of the ship
        enemy_at(&mut state, 190.0, 620.0);
        let delta = steer(&state, 6.0);
        assert_eq!(delta.x, -6.0);
    }

    #[test]
    fn test_turns_around_at_wall() {
        let mut state = session();
        state.apply_input(Vec2::new(-1000.0, 0.0));
        enemy_at(&mut state, 10.0, 620.0);
        let delta = steer(&state, 6.0);
        assert_eq!(delta.x, 6.0);
    }

    #[test]
    fn test_drives_real_input() {
        let mut state = session();
        enemy_at(&mut state, 0.0, 100.0);
        for _ in 0..100 {
            let delta = steer(&state, 6.0);
            state.apply_input(delta);
        }
        // Muzzle centred under the enemy as far as the wall allows
        assert_eq!(state.player.pos.x, 0.0);
    }
}
