//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a plain rectangle overlap. Positions are
//! top-left corners in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Whether a point lies inside (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }
}

/// Anything that occupies a rectangle on the playfield
pub trait Hitbox {
    fn hitbox(&self) -> Rect;
}

impl Hitbox for Rect {
    fn hitbox(&self) -> Rect {
        *self
    }
}

/// Check whether two entities' hitboxes overlap
#[inline]
pub fn check_collision(a: &impl Hitbox, b: &impl Hitbox) -> bool {
    a.hitbox().overlaps(&b.hitbox())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_player_sized_box_hits_enemy() {
        let player = Rect::new(400.0, 100.0, 120.0, 190.0);
        let enemy = Rect::new(420.0, 110.0, 50.0, 50.0);
        assert!(check_collision(&player, &enemy));

        let far = Rect::new(1000.0, 1000.0, 50.0, 50.0);
        assert!(!check_collision(&player, &far));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!check_collision(&a, &b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!check_collision(&a, &c));
    }

    #[test]
    fn test_center_and_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), Vec2::new(60.0, 40.0));
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 60.0)));
        assert!(!r.contains(Vec2::new(110.1, 60.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..300.0, 0.5f32..300.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
        }

        #[test]
        fn prop_identical_rects_collide(a in rect_strategy()) {
            prop_assert!(check_collision(&a, &a));
        }

        #[test]
        fn prop_disjoint_on_x_never_collide(
            a in rect_strategy(),
            gap in 0.0f32..100.0,
            h in 0.5f32..300.0,
        ) {
            let b = Rect::new(a.right() + gap, a.pos.y, 10.0, h);
            prop_assert!(!check_collision(&a, &b));
        }

        #[test]
        fn prop_disjoint_on_y_never_collide(
            a in rect_strategy(),
            gap in 0.0f32..100.0,
            w in 0.5f32..300.0,
        ) {
            let b = Rect::new(a.pos.x, a.bottom() + gap, w, 10.0);
            prop_assert!(!check_collision(&a, &b));
        }
    }
}
