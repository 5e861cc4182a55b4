//! Draw commands for individual entities

use glam::Vec2;

use super::commands::{DrawCommand, SpriteId, Surface, TextAlign, colors};
use crate::consts::*;
use crate::sim::{
    Enemy, EnemyKind, Explosion, ExplosionKind, Hitbox, Layer, Particle, Player, Projectile, Rect,
};

fn sprite(surface: &mut dyn Surface, sprite: SpriteId, src: Rect, dst: Rect) {
    surface.draw(DrawCommand::Sprite {
        sprite,
        src,
        dst,
        rotation: 0.0,
    });
}

/// Cell `(column, row)` of a sheet with uniform `size` cells
fn sheet_cell(column: u32, row: u32, size: Vec2) -> Rect {
    Rect::from_pos_size(Vec2::new(column as f32, row as f32) * size, size)
}

fn hitbox_outline(surface: &mut dyn Surface, entity: &impl Hitbox) {
    surface.draw(DrawCommand::StrokeRect {
        rect: entity.hitbox(),
        color: colors::HITBOX,
    });
}

/// A parallax strip, drawn twice so the seam never shows
pub fn layer(surface: &mut dyn Surface, layer: &Layer) {
    let size = Vec2::new(LAYER_WIDTH, LAYER_HEIGHT);
    let src = Rect::from_pos_size(Vec2::ZERO, size);
    let id = SpriteId::Layer(layer.index);
    sprite(surface, id, src, Rect::new(layer.x, 0.0, LAYER_WIDTH, LAYER_HEIGHT));
    sprite(surface, id, src, Rect::new(layer.x + LAYER_WIDTH, 0.0, LAYER_WIDTH, LAYER_HEIGHT));
}

pub fn projectile(surface: &mut dyn Surface, projectile: &Projectile, debug: bool) {
    if debug {
        hitbox_outline(surface, projectile);
    }
    sprite(
        surface,
        SpriteId::Projectile,
        Rect::from_pos_size(Vec2::ZERO, PROJECTILE_SIZE),
        projectile.hitbox(),
    );
}

/// The player and every bolt it owns
pub fn player(surface: &mut dyn Surface, player: &Player, debug: bool) {
    if debug {
        hitbox_outline(surface, player);
    }
    sprite(
        surface,
        SpriteId::Player,
        sheet_cell(player.frame_x, player.frame_y, player.size),
        player.hitbox(),
    );
    for bolt in &player.projectiles {
        projectile(surface, bolt, debug);
    }
}

pub fn enemy_sprite(kind: EnemyKind) -> SpriteId {
    match kind {
        EnemyKind::AnglerA => SpriteId::AnglerA,
        EnemyKind::AnglerB => SpriteId::AnglerB,
        EnemyKind::Lucky => SpriteId::Lucky,
        EnemyKind::Hive => SpriteId::HiveWhale,
        EnemyKind::Drone => SpriteId::Drone,
    }
}

pub fn enemy(surface: &mut dyn Surface, enemy: &Enemy, debug: bool) {
    if debug {
        hitbox_outline(surface, enemy);
    }
    sprite(
        surface,
        enemy_sprite(enemy.kind),
        sheet_cell(enemy.frame_x, enemy.frame_y, enemy.size),
        enemy.hitbox(),
    );
    if debug {
        surface.draw(DrawCommand::Text {
            text: enemy.lives.max(0).to_string(),
            pos: enemy.pos,
            size: 20.0,
            align: TextAlign::Left,
            color: colors::TEXT,
        });
    }
}

pub fn particle(surface: &mut dyn Surface, particle: &Particle) {
    surface.draw(DrawCommand::Sprite {
        sprite: SpriteId::Gears,
        src: sheet_cell(particle.frame.0, particle.frame.1, Vec2::splat(PARTICLE_SPRITE_SIZE)),
        dst: Rect::from_pos_size(particle.pos, Vec2::splat(particle.size)),
        rotation: particle.angle,
    });
}

pub fn explosion(surface: &mut dyn Surface, explosion: &Explosion) {
    let id = match explosion.kind {
        ExplosionKind::Smoke => SpriteId::SmokeExplosion,
        ExplosionKind::Fire => SpriteId::FireExplosion,
    };
    let size = Vec2::splat(EXPLOSION_SIZE);
    sprite(
        surface,
        id,
        sheet_cell(explosion.frame, 0, size),
        Rect::from_pos_size(explosion.pos, size),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_player_sheet_row_follows_power_up() {
        let mut p = Player::new(&Tuning::default());
        p.frame_x = 3;
        p.frame_y = 1;
        let mut out: Vec<DrawCommand> = Vec::new();
        player(&mut out, &p, false);
        assert_eq!(
            out[0],
            DrawCommand::Sprite {
                sprite: SpriteId::Player,
                src: Rect::new(360.0, 190.0, 120.0, 190.0),
                dst: Rect::from_pos_size(PLAYER_START, PLAYER_SIZE),
                rotation: 0.0,
            }
        );
    }

    #[test]
    fn test_debug_adds_outline_and_lives() {
        let mut rng = Pcg32::seed_from_u64(1);
        let e = Enemy::new(EnemyKind::Drone, Vec2::new(10.0, 20.0), &mut rng);

        let mut plain: Vec<DrawCommand> = Vec::new();
        enemy(&mut plain, &e, false);
        assert_eq!(plain.len(), 1);

        let mut debug: Vec<DrawCommand> = Vec::new();
        enemy(&mut debug, &e, true);
        assert_eq!(debug.len(), 3);
        assert!(matches!(debug[0], DrawCommand::StrokeRect { .. }));
        assert!(matches!(&debug[2], DrawCommand::Text { text, .. } if text == "3"));
    }

    #[test]
    fn test_layer_drawn_twice_for_seamless_wrap() {
        let strip = Layer {
            index: 2,
            x: -100.0,
            speed_modifier: 1.2,
        };
        let mut out: Vec<DrawCommand> = Vec::new();
        layer(&mut out, &strip);
        assert_eq!(out.len(), 2);
        match &out[1] {
            DrawCommand::Sprite { sprite, dst, .. } => {
                assert_eq!(*sprite, SpriteId::Layer(2));
                assert_eq!(dst.pos.x, LAYER_WIDTH - 100.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
