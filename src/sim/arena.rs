//! Logical arena bounds
//!
//! Positions are top-left corners in arena units; y grows downward.

use glam::Vec2;
use rand::Rng;

use crate::random_int;

/// Fixed simulation bounds, independent of display scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Clamp a box so it lies fully inside the arena
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let max = (self.size() - size).max(Vec2::ZERO);
        pos.clamp(Vec2::ZERO, max)
    }

    /// Random top-left corner that keeps the whole box on screen
    ///
    /// The center is drawn as a uniform integer in `[half, extent - half]`
    /// on each axis.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R, size: Vec2) -> Vec2 {
        let half = size * 0.5;
        let cx = random_int(rng, half.x, self.width - half.x);
        let cy = random_int(rng, half.y, self.height - half.y);
        Vec2::new(cx, cy) - half
    }

    /// True once a position is more than `margin` past any edge
    pub fn is_beyond(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }

    /// True if the box is fully inside the arena
    pub fn contains(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x >= 0.0
            && pos.y >= 0.0
            && pos.x + size.x <= self.width
            && pos.y + size.y <= self.height
    }
}
