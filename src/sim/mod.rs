//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed stage order within a tick
//! - Removal only while iterating index-descending
//! - No GPU or platform dependencies (draw output is plain data)

pub mod arena;
pub mod avatar;
pub mod collision;
pub mod entity;
pub mod input;
pub mod latch;
pub mod projectile;
pub mod shop;
pub mod state;
pub mod tick;
pub mod wave;

pub use arena::Arena;
pub use avatar::Avatar;
pub use collision::{ContactOutcome, resolve_collisions};
pub use entity::{
    Blueprint, Collection, EnemyVariant, Entity, EntityKind, Placement, SpawnOverrides,
};
pub use input::{Action, InputSnapshot};
pub use latch::EdgeLatch;
pub use projectile::FireControl;
pub use shop::{Shop, ShopEvents, ShopOption};
pub use state::{GameState, Hud, Score};
pub use tick::{FrameClock, tick};
pub use wave::{enemy_variant_for, wave_enemy_count};
