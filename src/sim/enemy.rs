//! Enemy variants
//!
//! One data-driven enemy type: per-variant numbers live in a static table and
//! behavior only branches on [`EnemyKind`] where a variant is truly special
//! (the lucky fish's power-up, the hive's drone swarm).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Hitbox, Rect};
use super::state::FrameContext;
use crate::consts::*;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Common angler, three colour rows
    AnglerA,
    /// Tougher angler
    AnglerB,
    /// Grants a power-up when rammed, worth a flat bonus when shot
    Lucky,
    /// Slow, armoured, releases drones when destroyed
    Hive,
    /// Fast reinforcement released by a hive
    Drone,
}

/// Fixed numbers for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub lives: i32,
    pub score: i64,
    pub size: Vec2,
    /// Horizontal speed is `-(min_speed + r * speed_spread)`, r in [0, 1)
    pub min_speed: f32,
    pub speed_spread: f32,
    /// Rows in the sprite sheet (one picked at spawn)
    pub sprite_rows: u32,
}

const ANGLER_A: EnemyStats = EnemyStats {
    lives: 5,
    score: 5,
    size: Vec2::new(228.0, 169.0),
    min_speed: 0.5,
    speed_spread: 1.5,
    sprite_rows: 3,
};

const ANGLER_B: EnemyStats = EnemyStats {
    lives: 6,
    score: 6,
    size: Vec2::new(213.0, 165.0),
    min_speed: 0.5,
    speed_spread: 1.5,
    sprite_rows: 2,
};

const LUCKY: EnemyStats = EnemyStats {
    lives: 5,
    score: 15,
    size: Vec2::new(99.0, 95.0),
    min_speed: 0.5,
    speed_spread: 1.5,
    sprite_rows: 2,
};

const HIVE: EnemyStats = EnemyStats {
    lives: 20,
    score: 20,
    size: Vec2::new(400.0, 227.0),
    min_speed: 0.2,
    speed_spread: 1.2,
    sprite_rows: 1,
};

const DRONE: EnemyStats = EnemyStats {
    lives: 3,
    score: 3,
    size: Vec2::new(115.0, 95.0),
    min_speed: 0.5,
    speed_spread: 4.2,
    sprite_rows: 2,
};

impl EnemyKind {
    pub fn stats(self) -> &'static EnemyStats {
        match self {
            EnemyKind::AnglerA => &ANGLER_A,
            EnemyKind::AnglerB => &ANGLER_B,
            EnemyKind::Lucky => &LUCKY,
            EnemyKind::Hive => &HIVE,
            EnemyKind::Drone => &DRONE,
        }
    }

    /// Map a uniform roll in [0, 1) to a spawnable variant.
    /// Drones never come from the spawner, only from hives.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.3 {
            EnemyKind::AnglerA
        } else if roll < 0.6 {
            EnemyKind::AnglerB
        } else if roll < 0.7 {
            EnemyKind::Hive
        } else {
            EnemyKind::Lucky
        }
    }
}

/// A live opponent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Horizontal speed, negative (px/frame)
    pub speed_x: f32,
    pub size: Vec2,
    pub lives: i32,
    pub score: i64,
    pub frame_x: u32,
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// Create an enemy of `kind` with its top-left corner at `pos`
    pub fn new<R: Rng + ?Sized>(kind: EnemyKind, pos: Vec2, rng: &mut R) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            speed_x: -(stats.min_speed + rng.random::<f32>() * stats.speed_spread),
            size: stats.size,
            lives: stats.lives,
            score: stats.score,
            frame_x: 0,
            frame_y: rng.random_range(0..stats.sprite_rows),
            marked_for_deletion: false,
        }
    }

    /// Enter from the right edge at a random height
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, ctx: &FrameContext, rng: &mut R) -> Self {
        let size = kind.stats().size;
        let y_range = (ctx.height * ENEMY_SPAWN_HEIGHT_FACTOR - size.y).max(0.0);
        let y = rng.random::<f32>() * y_range;
        Self::new(kind, Vec2::new(ctx.width, y), rng)
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed_x;

        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
        }

        if self.frame_x < SPRITE_MAX_FRAME {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox().center()
    }

    pub fn is_dead(&self) -> bool {
        self.lives <= 0
    }

    /// Drones released when a hive goes down, scattered over the top half of
    /// its footprint. Empty for every other variant.
    pub fn release_drones<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Enemy> {
        if self.kind != EnemyKind::Hive {
            return Vec::new();
        }
        (0..HIVE_DRONE_COUNT)
            .map(|_| {
                let offset = Vec2::new(
                    rng.random::<f32>() * self.size.x,
                    rng.random::<f32>() * self.size.y * 0.5,
                );
                Enemy::new(EnemyKind::Drone, self.pos + offset, rng)
            })
            .collect()
    }
}

impl Hitbox for Enemy {
    fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}
