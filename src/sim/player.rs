//! The player's submarine
//!
//! The player never touches shared state directly: `update` reports what
//! happened as [`PlayerEvent`]s and the tick applies them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Hitbox, Rect};
use super::effects::Projectile;
use super::state::FrameContext;
use crate::consts::*;
use crate::input::{Key, KeySet};
use crate::tuning::Tuning;

/// Side effects of a player update, applied by the tick in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Trigger pulled (the shoot sound plays even on an empty magazine)
    Fired,
    /// One round consumed
    AmmoSpent,
    /// Power-up trickle
    AmmoRegenerated(f32),
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed: Vec2,
    pub size: Vec2,
    /// Time since the last accepted shot (ms)
    pub shoot_timer: f32,
    pub shoot_interval: f32,
    pub power_up: bool,
    pub power_up_timer: f32,
    pub power_up_limit: f32,
    pub power_up_regen: f32,
    pub frame_x: u32,
    /// 1 while powered up
    pub frame_y: u32,
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: PLAYER_START,
            speed: Vec2::ZERO,
            size: PLAYER_SIZE,
            shoot_timer: 0.0,
            shoot_interval: tuning.shoot_interval_ms,
            power_up: false,
            power_up_timer: 0.0,
            power_up_limit: tuning.power_up_duration_ms,
            power_up_regen: tuning.power_up_ammo_regen,
            frame_x: 0,
            frame_y: 0,
            projectiles: Vec::new(),
        }
    }

    /// Advance one frame. `ammo` is the magazine as it stands at the start of
    /// the frame; every change to it comes back as an event.
    pub fn update(&mut self, ctx: &FrameContext, keys: &KeySet, ammo: f32) -> Vec<PlayerEvent> {
        let mut events = Vec::new();

        self.speed.x = keys.axis(Key::Left, Key::Right) * PLAYER_MAX_SPEED;

        if self.shoot_timer < self.shoot_interval {
            self.shoot_timer += ctx.dt;
        } else if keys.is_held(Key::Fire) {
            self.shoot(ctx, ammo, &mut events);
            self.shoot_timer = 0.0;
        }

        // Stay in the left half of the field
        let x_max = ctx.width * 0.5 - self.size.x * 0.5;
        self.pos.x = (self.pos.x + self.speed.x).min(x_max).max(PLAYER_MIN_X);

        self.speed.y = keys.axis(Key::Up, Key::Down) * PLAYER_MAX_SPEED;

        // Half the sprite may hang over the top or bottom edge
        let y_min = -self.size.y * 0.5;
        let y_max = ctx.height - self.size.y * 0.5;
        self.pos.y = (self.pos.y + self.speed.y).min(y_max).max(y_min);

        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.sweep_projectiles();

        if self.frame_x < SPRITE_MAX_FRAME {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }

        if self.power_up {
            if self.power_up_timer > self.power_up_limit {
                self.power_up_timer = 0.0;
                self.power_up = false;
                self.frame_y = 0;
            } else {
                self.power_up_timer += ctx.dt;
                self.frame_y = 1;
                if !ctx.game_over {
                    events.push(PlayerEvent::AmmoRegenerated(self.power_up_regen));
                }
            }
        }

        events
    }

    fn shoot(&mut self, ctx: &FrameContext, ammo: f32, events: &mut Vec<PlayerEvent>) {
        events.push(PlayerEvent::Fired);
        let mut ammo = ammo;
        if ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.pos + MUZZLE_TOP, ctx.width));
            events.push(PlayerEvent::AmmoSpent);
            ammo = (ammo - 1.0).max(0.0);
        }
        // The lower cannon rides along for free
        if self.power_up && ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.pos + MUZZLE_BOTTOM, ctx.width));
        }
    }

    /// Start (or restart) the power-up. The caller tops up ammo.
    pub fn enter_power_up(&mut self) {
        self.power_up_timer = 0.0;
        self.power_up = true;
    }

    /// Drop bolts that expired or hit something
    pub fn sweep_projectiles(&mut self) {
        self.projectiles.retain(|p| !p.marked_for_deletion);
    }
}

impl Hitbox for Player {
    fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}
