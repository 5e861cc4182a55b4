//! Draw commands and the surface that consumes them

use glam::Vec2;

use crate::sim::Rect;

/// Images the host must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Projectile,
    Gears,
    AnglerA,
    AnglerB,
    Lucky,
    HiveWhale,
    Drone,
    SmokeExplosion,
    FireExplosion,
    /// Parallax strip, 0 = farthest
    Layer(usize),
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// A single draw call. Colors are 0xRRGGBB.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Blit `src` from the sprite sheet into `dst`, rotated about `dst`'s
    /// top-left corner by `rotation` radians
    Sprite {
        sprite: SpriteId,
        src: Rect,
        dst: Rect,
        rotation: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: TextAlign,
        color: u32,
    },
    FillRect {
        rect: Rect,
        color: u32,
    },
    StrokeRect {
        rect: Rect,
        color: u32,
    },
}

/// Anything that accepts draw commands
pub trait Surface {
    fn draw(&mut self, command: DrawCommand);
}

/// Records commands in order
impl Surface for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Colors for game elements
pub mod colors {
    pub const TEXT: u32 = 0xFFFFFF;
    pub const AMMO: u32 = 0xFFFFFF;
    pub const AMMO_POWERED: u32 = 0xFFFFBD;
    pub const HITBOX: u32 = 0x000000;
}
