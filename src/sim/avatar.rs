//! The player-controlled avatar

use glam::Vec2;

use super::arena::Arena;
use super::input::{Action, InputSnapshot};
use crate::renderer::draw::{Color, colors};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Top-left corner
    pub pos: Vec2,
    /// Position before the last [`Avatar::advance`]
    pub prev_pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    pub health: i32,
    pub health_max: i32,
}

impl Avatar {
    /// Avatar centered in the arena at full health
    pub fn new(tuning: &Tuning, arena: &Arena) -> Self {
        let size = Vec2::new(tuning.avatar_width, tuning.avatar_height);
        let pos = arena.center() - size * 0.5;
        Self {
            pos,
            prev_pos: pos,
            size,
            speed: tuning.avatar_speed,
            color: colors::AVATAR,
            health: tuning.avatar_health,
            health_max: tuning.avatar_health,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move by the held direction keys, then clamp into the arena
    ///
    /// Diagonals are scaled to unit length, so speed is the same along
    /// every one of the eight directions.
    pub fn advance(&mut self, input: &InputSnapshot, dt: f32, arena: &Arena) {
        self.prev_pos = self.pos;
        let intent = movement_intent(input);
        self.pos += intent * self.speed * dt;
        self.pos = arena.clamp(self.pos, self.size);
    }
}

/// Unit-or-zero 8-direction intent from the movement keys
pub fn movement_intent(input: &InputSnapshot) -> Vec2 {
    let x = input.axis(Action::MoveLeft, Action::MoveRight);
    let y = input.axis(Action::MoveUp, Action::MoveDown);
    let intent = Vec2::new(x, y);
    if x != 0.0 && y != 0.0 {
        intent * std::f32::consts::FRAC_1_SQRT_2
    } else {
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Avatar, Arena) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.arena_width, tuning.arena_height);
        (Avatar::new(&tuning, &arena), arena)
    }

    #[test]
    fn test_starts_centered() {
        let (avatar, arena) = setup();
        assert_eq!(avatar.center(), arena.center());
        assert_eq!(avatar.health, 10);
    }

    #[test]
    fn test_cardinal_move() {
        let (mut avatar, arena) = setup();
        let start = avatar.pos;
        avatar.advance(&InputSnapshot::with(&[Action::MoveLeft]), 0.1, &arena);
        assert!((avatar.pos.x - (start.x - 27.0)).abs() < 1e-3);
        assert_eq!(avatar.pos.y, start.y);
        assert_eq!(avatar.prev_pos, start);
    }

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let (mut avatar, arena) = setup();
        let start = avatar.pos;
        let input = InputSnapshot::with(&[Action::MoveUp, Action::MoveRight]);
        // Small dt keeps the move inside the arena
        avatar.advance(&input, 0.5, &arena);

        let delta = avatar.pos - start;
        let expected = 270.0 * 0.5 / std::f32::consts::SQRT_2;
        assert!((delta.x - expected).abs() < 1e-3);
        assert!((delta.y + expected).abs() < 1e-3);
        assert!((delta.length() - 135.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_keys_no_motion() {
        let (mut avatar, arena) = setup();
        let start = avatar.pos;
        avatar.advance(&InputSnapshot::new(), 0.05, &arena);
        assert_eq!(avatar.pos, start);
    }

    #[test]
    fn test_clamped_to_arena() {
        let (mut avatar, arena) = setup();
        let input = InputSnapshot::with(&[Action::MoveDown, Action::MoveRight]);
        for _ in 0..200 {
            avatar.advance(&input, 0.05, &arena);
        }
        assert_eq!(avatar.pos, arena.size() - avatar.size);

        let input = InputSnapshot::with(&[Action::MoveUp, Action::MoveLeft]);
        for _ in 0..200 {
            avatar.advance(&input, 0.05, &arena);
        }
        assert_eq!(avatar.pos, Vec2::ZERO);
    }

    #[test]
    fn test_negative_dt_tolerated() {
        let (mut avatar, arena) = setup();
        avatar.advance(&InputSnapshot::new(), -0.5, &arena);
        assert!(arena.contains(avatar.pos, avatar.size));
    }
}
