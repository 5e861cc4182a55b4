//! Projectiles and cosmetic effects
//!
//! All three types self-expire by raising `marked_for_deletion`; whoever owns
//! the collection sweeps them out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Hitbox, Rect};
use super::state::FrameContext;
use crate::consts::*;

/// A bolt fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Expiry boundary, fixed when fired
    pub max_x: f32,
    pub marked_for_deletion: bool,
}

impl Projectile {
    /// Fire a bolt from `pos`. Bolts fired deeper into the field expire sooner
    /// but never make it past 95% of the playfield width.
    pub fn new(pos: Vec2, playfield_width: f32) -> Self {
        Self {
            pos,
            max_x: (playfield_width * 0.95).min(playfield_width * 0.7 + pos.x),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.x += PROJECTILE_SPEED;
        if self.pos.x > self.max_x {
            self.marked_for_deletion = true;
        }
    }
}

impl Hitbox for Projectile {
    fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, PROJECTILE_SIZE)
    }
}

/// A gear flung out of a damaged machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cell in the 3x3 gear sheet
    pub frame: (u32, u32),
    /// Drawn size in px (sprite size scaled by 0.5..=1.0)
    pub size: f32,
    pub angle: f32,
    /// Angular velocity (radians/frame)
    pub spin: f32,
    /// Height above the playfield bottom where this gear bounces
    pub floor_offset: f32,
    pub bounces: u32,
    pub marked_for_deletion: bool,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        // Size factor rounded to one decimal so gears come in a few discrete sizes
        let size_factor = ((rng.random::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            pos,
            vel: Vec2::new(rng.random::<f32>() * 6.0 - 3.0, rng.random::<f32>() * -15.0),
            frame: (rng.random_range(0..3), rng.random_range(0..3)),
            size: PARTICLE_SPRITE_SIZE * size_factor,
            angle: 0.0,
            spin: rng.random::<f32>() * 0.2 - 0.1,
            floor_offset: rng.random::<f32>() * 80.0 + 60.0,
            bounces: 0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.angle += self.spin;
        self.vel.y += PARTICLE_GRAVITY;
        // vel.x is measured against the scroll direction
        self.pos.x -= self.vel.x + ctx.scroll_speed;
        self.pos.y += self.vel.y;

        if self.pos.y > ctx.height + self.size || self.pos.x < -self.size {
            self.marked_for_deletion = true;
        }

        if self.pos.y > ctx.height - self.floor_offset && self.bounces < PARTICLE_MAX_BOUNCES {
            self.bounces += 1;
            self.vel.y *= -PARTICLE_BOUNCE_DAMPING;
        }
    }
}

/// Explosion sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

impl ExplosionKind {
    /// Even odds between smoke and fire
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<f32>() < 0.5 {
            ExplosionKind::Smoke
        } else {
            ExplosionKind::Fire
        }
    }
}

/// A one-shot explosion animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Top-left corner of the 200x200 frame
    pub pos: Vec2,
    pub frame: u32,
    pub timer: f32,
    /// Time per frame (ms)
    pub interval: f32,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// Create an explosion centred on `center`
    pub fn new(center: Vec2, kind: ExplosionKind) -> Self {
        Self {
            kind,
            pos: center - Vec2::splat(EXPLOSION_SIZE * 0.5),
            frame: 0,
            timer: 0.0,
            interval: 1000.0 / EXPLOSION_FPS,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.pos.x -= ctx.scroll_speed;
        if self.timer > self.interval {
            self.frame += 1;
            self.timer = 0.0;
        } else {
            self.timer += ctx.dt;
        }
        if self.frame > EXPLOSION_LAST_FRAME {
            self.marked_for_deletion = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ctx(dt: f32) -> FrameContext {
        FrameContext {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            scroll_speed: 1.0,
            dt,
            game_over: false,
        }
    }

    #[test]
    fn test_projectile_expiry_boundary() {
        let near = Projectile::new(Vec2::new(100.0, 0.0), 1000.0);
        assert_eq!(near.max_x, 800.0);
        let deep = Projectile::new(Vec2::new(400.0, 0.0), 1000.0);
        assert_eq!(deep.max_x, 950.0);
    }

    #[test]
    fn test_projectile_expires_after_travel() {
        let mut bolt = Projectile::new(Vec2::new(100.0, 50.0), 1000.0);
        let mut frames = 0;
        while !bolt.marked_for_deletion {
            bolt.update();
            frames += 1;
            assert!(frames < 1000, "bolt never expired");
        }
        assert!(bolt.pos.x > bolt.max_x);
        assert!(bolt.pos.x < 1000.0);
    }

    #[test]
    fn test_particle_bounces_once_then_falls_out() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut gear = Particle::new(Vec2::new(500.0, 250.0), &mut rng);
        gear.vel = Vec2::new(0.0, 0.0);
        gear.floor_offset = 100.0;

        let mut frames = 0;
        while !gear.marked_for_deletion {
            gear.update(&ctx(16.0));
            frames += 1;
            assert!(frames < 10_000, "particle never left the playfield");
        }
        assert_eq!(gear.bounces, 1);
        assert!(gear.pos.y > PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_particle_random_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let p = Particle::new(Vec2::ZERO, &mut rng);
            assert!((25.0..=50.0).contains(&p.size));
            assert!(p.frame.0 < 3 && p.frame.1 < 3);
            assert!((-3.0..3.0).contains(&p.vel.x));
            assert!((-15.0..=0.0).contains(&p.vel.y));
            assert!((60.0..140.0).contains(&p.floor_offset));
        }
    }

    #[test]
    fn test_explosion_runs_all_frames_then_deletes() {
        let mut boom = Explosion::new(Vec2::new(300.0, 300.0), ExplosionKind::Fire);
        assert_eq!(boom.pos, Vec2::new(200.0, 200.0));

        let mut updates = 0;
        while !boom.marked_for_deletion {
            boom.update(&ctx(20.0));
            updates += 1;
            assert!(updates < 1000);
        }
        assert_eq!(boom.frame, EXPLOSION_LAST_FRAME + 1);
        // Drifted with the world
        assert!(boom.pos.x < 200.0);
    }
}
