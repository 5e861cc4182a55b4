//! Per-frame simulation tick
//!
//! Advances every entity in a fixed order, resolves collisions and sweeps
//! flagged entities out of their collections. Audio is not played here: the
//! tick returns the effects it wants and the caller forwards them.

use rand::Rng;

use super::collision::check_collision;
use super::effects::{Explosion, ExplosionKind, Particle};
use super::enemy::{Enemy, EnemyKind};
use super::player::PlayerEvent;
use super::state::GameState;
use crate::audio::SoundEffect;
use crate::input::KeySet;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held at the start of the frame
    pub keys: KeySet,
    /// Host wall-clock time (ms), used to stamp game over
    pub now_ms: f64,
    /// Flip the hitbox overlay
    pub toggle_debug: bool,
}

/// Advance the game by `dt` milliseconds.
/// Returns the sound effects triggered during the frame, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<SoundEffect> {
    let mut sounds = Vec::new();

    state.keys = input.keys.clone();
    if input.toggle_debug {
        state.debug = !state.debug;
    }

    // Session clock
    if !state.game_over {
        state.game_time += dt;
        let out_of_time = state.game_time > state.tuning.time_limit_ms;
        if out_of_time && state.score < state.tuning.winning_score {
            state.game_over = true;
            state.game_over_at = Some(input.now_ms);
            log::info!("Game over at {:.1}s with score {}", state.game_time * 0.001, state.score);
        }
    }

    state.background.update(state.scroll_speed);

    let ctx = state.frame_context(dt);

    // Player
    for event in state.player.update(&ctx, &state.keys, state.ammo.current()) {
        match event {
            PlayerEvent::Fired => sounds.push(SoundEffect::Shoot),
            PlayerEvent::AmmoSpent => state.ammo.spend_round(),
            PlayerEvent::AmmoRegenerated(amount) => state.ammo.add(amount),
        }
    }

    // Passive ammo regeneration
    if state.ammo_timer > state.tuning.ammo_interval_ms {
        state.ammo.add(1.0);
        state.ammo_timer = 0.0;
    } else {
        state.ammo_timer += dt;
    }

    for particle in &mut state.particles {
        particle.update(&ctx);
    }
    state.particles.retain(|p| !p.marked_for_deletion);

    for explosion in &mut state.explosions {
        explosion.update(&ctx);
    }
    state.explosions.retain(|e| !e.marked_for_deletion);

    update_enemies(state, &mut sounds);

    if state.spawner.advance(dt, state.score, state.game_over) {
        let roll: f32 = state.rng.random();
        let kind = EnemyKind::from_roll(roll);
        let enemy = Enemy::spawn(kind, &state.frame_context(dt), &mut state.rng);
        log::debug!("Admitted {:?} at y={:.0}", kind, enemy.pos.y);
        state.enemies.push(enemy);
    }

    sounds
}

/// Move enemies and resolve their collisions with the player and bolts
fn update_enemies(state: &mut GameState, sounds: &mut Vec<SoundEffect>) {
    let GameState {
        rng,
        score,
        game_over,
        ammo,
        player,
        enemies,
        particles,
        explosions,
        ..
    } = state;

    // Drones join the live set after the sweep
    let mut reinforcements = Vec::new();

    for enemy in enemies.iter_mut() {
        enemy.update();

        if check_collision(&*player, &*enemy) {
            enemy.marked_for_deletion = true;
            let center = enemy.center();
            explosions.push(Explosion::new(center, ExplosionKind::random(rng)));
            for _ in 0..enemy.lives.max(0) {
                particles.push(Particle::new(center, rng));
            }
            if enemy.kind == EnemyKind::Lucky {
                player.enter_power_up();
                ammo.top_up();
                sounds.push(SoundEffect::PowerUp);
            } else if !*game_over {
                sounds.push(SoundEffect::Damage);
                *score -= 1;
            }
        }

        for projectile in player.projectiles.iter_mut() {
            // Already destroyed this frame; remaining bolts fly on
            if enemy.is_dead() {
                break;
            }
            if projectile.marked_for_deletion || !check_collision(&*projectile, &*enemy) {
                continue;
            }

            enemy.lives -= 1;
            projectile.marked_for_deletion = true;
            let center = enemy.center();
            particles.push(Particle::new(center, rng));

            if enemy.is_dead() {
                for _ in 0..enemy.lives.max(0) {
                    particles.push(Particle::new(center, rng));
                }
                enemy.marked_for_deletion = true;
                explosions.push(Explosion::new(center, ExplosionKind::random(rng)));
                sounds.push(SoundEffect::EnemyDestroyed);
                reinforcements.extend(enemy.release_drones(rng));
                if !*game_over {
                    *score += enemy.score;
                }
                log::debug!("{:?} destroyed, score {}", enemy.kind, score);
            }
        }
        player.sweep_projectiles();
    }

    enemies.retain(|e| !e.marked_for_deletion);
    enemies.extend(reinforcements);
}
