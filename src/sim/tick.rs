//! Per-frame simulation tick
//!
//! Core game loop: one call per animation frame, driven by the measured
//! frame interval. Movement is per frame; timers are in milliseconds.

use glam::Vec2;
use rand::Rng;

use super::collision::check_collision;
use super::enemy::{Enemy, EnemyKind};
use super::input::{InputEvent, InputState};
use super::state::{GameState, Sound};
use crate::consts::DRONE_SWARM;

/// Advance the game state by one frame of `dt` milliseconds
pub fn tick(state: &mut GameState, input: &mut InputState, dt: f32) {
    // Clock hiccups (negative or NaN deltas) count as an empty frame
    let dt = dt.max(0.0);
    state.frame += 1;

    // One-shot actions, in the order they arrived
    for event in input.drain_events() {
        match event {
            InputEvent::Fire => {
                state.fire();
            }
            InputEvent::ToggleDebug => {
                state.debug = !state.debug;
                log::info!("Debug overlay: {}", state.debug);
            }
        }
    }

    // Run clock
    if !state.is_game_over() {
        state.game_time += dt;
    }
    if state.game_time > state.tuning.time_limit_ms && state.finish() {
        log::info!(
            "Game over at {:.1}s: score {} ({:?})",
            state.game_time * 0.001,
            state.score,
            state.outcome()
        );
    }

    let scroll = state.tuning.scroll_speed;
    let playfield = state.playfield();

    state.background.update(scroll);

    {
        let vertical = input.vertical();
        let (player, sounds) = state.player_and_sounds();
        player.update(dt, vertical, playfield, sounds);
    }

    state.shield.update(dt);

    // Passive ammo regeneration
    if state.ammo_timer > state.tuning.ammo_interval_ms {
        state.player.add_ammo(1);
        state.ammo_timer = 0.0;
    } else {
        state.ammo_timer += dt;
    }

    for particle in &mut state.particles {
        particle.update(scroll, playfield.y);
    }
    state.particles.retain(|p| !p.marked_for_deletion);

    update_enemies(state);

    // Enemy spawning stops with the clock
    if state.enemy_timer > state.tuning.enemy_interval_ms && !state.is_game_over() {
        state.add_enemy();
        state.enemy_timer = 0.0;
    } else {
        state.enemy_timer += dt;
    }

    for explosion in &mut state.explosions {
        explosion.update(dt, scroll);
    }
    state.explosions.retain(|e| !e.marked_for_deletion);
}

/// Milliseconds since the previous animation frame.
///
/// The first frame has no predecessor and advances nothing.
pub fn frame_delta(last_time: Option<f64>, time: f64) -> f32 {
    match last_time {
        Some(last) => (time - last) as f32,
        None => 0.0,
    }
}

/// Move enemies and resolve rams and fireball hits.
///
/// Ram and fireball checks are independent: an enemy killed by a fireball
/// while also touching the player triggers both sets of effects this frame.
fn update_enemies(state: &mut GameState) {
    let scroll = state.tuning.scroll_speed;
    let player_bounds = state.player.bounds();
    let mut swarm: Vec<Enemy> = Vec::new();

    for i in 0..state.enemies.len() {
        state.enemies[i].update(scroll);
        let enemy = &state.enemies[i];
        let (kind, bounds, center, score) = (enemy.kind, enemy.bounds(), enemy.center(), enemy.score());

        // Ram
        if check_collision(&player_bounds, &bounds) {
            state.play(Sound::Hit);
            state.add_explosion(center);
            reset_shield(state);
            if kind == EnemyKind::Lucky {
                let (player, sounds) = state.player_and_sounds();
                player.enter_power_up(sounds);
            } else if !state.is_game_over() {
                state.score -= 1;
            }
            state.enemies[i].marked_for_deletion = true;
            state.add_particles(center, score as usize);
        }

        // Fireballs. A spent fireball stays in the list until the next player
        // update, so it can still hit other enemies it overlaps this frame.
        for j in 0..state.player.projectiles.len() {
            if !check_collision(&state.player.projectiles[j].bounds(), &bounds) {
                continue;
            }
            state.add_explosion(center);
            state.play(Sound::Explosion);
            state.add_particles(center, 1);
            state.player.projectiles[j].marked_for_deletion = true;

            if !state.enemies[i].take_hit() {
                continue;
            }

            state.add_explosion(center);
            match kind {
                EnemyKind::HiveWhale => {
                    for _ in 0..DRONE_SWARM {
                        let x = bounds.x + state.rng.random::<f32>() * bounds.width;
                        let pos = Vec2::new(x, bounds.y + bounds.height * 0.5);
                        swarm.push(Enemy::new(EnemyKind::Drone, pos, &mut state.rng));
                    }
                }
                EnemyKind::MoonFish => {
                    let (player, sounds) = state.player_and_sounds();
                    player.enter_power_up(sounds);
                }
                _ => {}
            }
            state.add_particles(center, score as usize);
            state.enemies[i].marked_for_deletion = true;
            if !state.is_game_over() {
                state.score += score;
            }
            log::debug!("Destroyed {:?} (+{}), score {}", kind, score, state.score);
        }
    }

    // Drones join after the pass so they first move next frame
    state.enemies.extend(swarm);
    state.enemies.retain(|e| !e.marked_for_deletion);
}

/// Restart the shield flash after a ram
fn reset_shield(state: &mut GameState) {
    state.shield.reset();
    state.play(Sound::Shield);
}
