//! Wave Survivor - A top-down wave survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, waves, shop)
//! - `renderer`: Declarative draw list and WebGPU rendering pipeline
//! - `platform`: Browser key bindings
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical arena resolution, independent of the on-screen canvas size
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Largest simulation step a single frame may take (frame hitches)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Avatar defaults
    pub const AVATAR_SIZE: f32 = 40.0;
    pub const AVATAR_SPEED: f32 = 270.0;
    pub const AVATAR_HEALTH: i32 = 10;

    /// Projectile defaults
    pub const FIRE_COOLDOWN: f32 = 0.15;
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 600.0;
    pub const PROJECTILE_DAMAGE: i32 = 2;
    /// How far past the arena edge a projectile may travel before culling
    pub const CULL_MARGIN: f32 = 10.0;

    /// Entity health when a spawn doesn't specify one
    pub const DEFAULT_HEALTH: i32 = 10;

    /// Pickup (coin) defaults
    pub const PICKUP_SIZE: f32 = 14.0;

    /// Contact damage and the grace period that follows it
    pub const CONTACT_DAMAGE: i32 = 1;
    pub const GRACE_PERIOD: f32 = 1.0;

    /// Shop
    pub const UPGRADE_COST: u32 = 25;
    pub const SPEED_UPGRADE: f32 = 10.0;
    pub const SIZE_UPGRADE_FACTOR: f32 = 1.1;
}

/// Uniform random integer in `[min, max]` (inclusive)
///
/// Float bounds are tightened to the integers inside them. A collapsed
/// range (`max < min`) yields `min`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let lo = min.ceil() as i32;
    let hi = max.floor() as i32;
    if hi <= lo {
        return lo as f32;
    }
    rng.random_range(lo..=hi) as f32
}

/// Axis-aligned bounding box overlap (top-left position + size)
///
/// Touching edges do not count as overlap.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}
