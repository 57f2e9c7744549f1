//! Per-frame simulation step
//!
//! Fixed system order each frame: win check, spawning, enemy behavior,
//! bullet kinematics, bounds pruning, input, player movement, hit
//! resolution, cosmetic cleanup. Behavior and movement resolve before
//! collisions so a same-frame kill and a same-frame move both show up in
//! the next drawn frame.

use super::bullet::Side;
use super::collision::{prune_out_of_bounds, resolve_bullet_hits};
use super::enemy::{Direction, EnemyAction, choose_action, valid_position};
use super::explosion::Explosion;
use super::player::PlayerCommand;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held movement/rotation commands, applied in order
    pub commands: Vec<PlayerCommand>,
    /// Fire one bullet this frame
    pub fire: bool,
    /// Quit requested
    pub quit: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.frame += 1;
    state.time += dt;

    if state.is_won() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::PlayerWon);
        log::info!(
            "Player won after {:.1}s ({} frames)",
            state.time,
            state.frame
        );
        return;
    }

    update_spawning(state, dt);
    update_enemies(state, dt);

    for bullet in state
        .player_bullets
        .iter_mut()
        .chain(state.enemy_bullets.iter_mut())
    {
        bullet.advance(dt);
    }
    prune_out_of_bounds(&mut state.player_bullets, &state.arena);
    prune_out_of_bounds(&mut state.enemy_bullets, &state.arena);

    if input.quit {
        state.phase = GamePhase::Quit;
        state.events.push(GameEvent::Quit);
        log::info!("Quit requested");
        return;
    }
    if input.fire {
        let bullet = state
            .player
            .fire(state.sprites.bullet, state.bullet_velocity);
        state.player_bullets.push(bullet);
        state.events.push(GameEvent::Shot { side: Side::Player });
    }

    update_player(state, &input.commands, dt);
    resolve_hits(state);

    for explosion in &mut state.explosions {
        explosion.advance(dt);
    }
    state.explosions.retain(|e| !e.finished);
}

/// Timed spawning up to the level cap
fn update_spawning(state: &mut GameState, dt: f32) {
    if !state.spawner.advance(dt) {
        return;
    }
    match state.spawn_enemy() {
        Ok(_) => state.spawner.record_spawn(),
        Err(err) => {
            log::error!("Skipping enemy spawn: {err}");
            state.spawner.skip_spawn();
            debug_assert!(false, "enemy placement failed: {err}");
        }
    }
}

/// Behavior timers, rotation animation and autonomous actions
fn update_enemies(state: &mut GameState, dt: f32) {
    let level = &state.level;
    let rng = &mut state.rng;
    let enemies = &mut state.enemies;
    let player_bounds = state.player.bounds;

    for i in 0..enemies.len() {
        enemies[i].advance(dt, level.rotation);
        if !enemies[i].will_act() {
            continue;
        }

        match choose_action(&level.actions, rng) {
            Some(EnemyAction::Move) => {
                let direction = Direction::random(rng);
                let candidate = enemies[i].move_candidate(direction, level.enemy_speed, dt);
                if valid_position(
                    &candidate,
                    Some(enemies[i].id),
                    enemies,
                    &player_bounds,
                    &state.arena,
                ) {
                    enemies[i].bounds = candidate;
                }
            }
            Some(EnemyAction::Rotate) => {
                enemies[i].pick_rotation_target(
                    rng,
                    player_bounds.center(),
                    level.aim_at_player,
                    level.rotation,
                );
            }
            Some(EnemyAction::Fire) => {
                let bullet = enemies[i].fire(state.sprites.bullet, state.bullet_velocity);
                state.enemy_bullets.push(bullet);
                state.events.push(GameEvent::Shot { side: Side::Enemy });
            }
            None => {}
        }
    }
}

/// Apply held commands; each candidate is committed only if valid
fn update_player(state: &mut GameState, commands: &[PlayerCommand], dt: f32) {
    for &command in commands {
        if let Some(next) = state
            .player
            .try_command(command, dt, &state.enemies, &state.arena)
        {
            state.player = next;
        }
    }
}

/// Player bullets destroy the enemies their nose enters
fn resolve_hits(state: &mut GameState) {
    let destroyed = resolve_bullet_hits(&state.player_bullets, &mut state.enemies);
    for enemy in destroyed {
        let center = enemy.bounds.center();
        state.explosions.push(Explosion::at(center));
        state.events.push(GameEvent::EnemyDestroyed {
            id: enemy.id,
            center,
        });
        log::debug!(
            "Enemy {:?} destroyed, {} alive, {}/{} spawned",
            enemy.id,
            state.enemies.len(),
            state.spawner.spawned,
            state.spawner.cap
        );
    }
}
