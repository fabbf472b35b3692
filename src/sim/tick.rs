//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one tick. Stage order matters:
//! culls run before motion, motion before collision, and all removals from
//! a collision pass are applied together after the scan.

use super::state::GameState;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    // Stale bullets are judged on last tick's position
    state.bullets.retain(|b| !b.is_out_of_bounds());
    for bullet in &mut state.bullets {
        bullet.advance(1);
    }

    let arena = state.arena;
    state.enemies.retain(|e| !e.is_out_of_bounds(&arena));
    for enemy in &mut state.enemies {
        enemy.advance(1);
    }

    resolve_bullet_hits(state);

    if player_is_hit(state) {
        state.end();
    }
}

/// All-pairs bullet/enemy scan.
///
/// Every overlapping pair marks both sides; a bullet overlapping two enemies
/// takes both down. Marked entities are removed after the full scan and the
/// score grows by one per destroyed enemy. Returns that count.
pub fn resolve_bullet_hits(state: &mut GameState) -> u32 {
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut enemy_hit = vec![false; state.enemies.len()];

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if bullet_rect.overlaps(&enemy.rect()) {
                bullet_hit[bi] = true;
                enemy_hit[ei] = true;
                log::debug!("Bullet {} hit enemy {}", bullet.id, enemy.id);
            }
        }
    }

    let destroyed = enemy_hit.iter().filter(|&&hit| hit).count() as u32;
    if destroyed == 0 {
        return 0;
    }

    // retain visits elements in order, so the masks line up
    let mut hits = bullet_hit.into_iter();
    state.bullets.retain(|_| !hits.next().unwrap_or(false));
    let mut hits = enemy_hit.into_iter();
    state.enemies.retain(|_| !hits.next().unwrap_or(false));

    state.score += u64::from(destroyed);
    destroyed
}

/// Whether any live enemy overlaps the player's ship
pub fn player_is_hit(state: &GameState) -> bool {
    let player = state.player.rect();
    state.enemies.iter().any(|e| e.rect().overlaps(&player))
}
