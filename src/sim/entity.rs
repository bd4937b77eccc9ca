//! Dynamic entities and the collections that own them
//!
//! Enemies, projectiles and pickups share one record type. Each
//! [`Collection`] carries a [`Blueprint`] of defaults that fills in whatever
//! a spawn's [`SpawnOverrides`] leaves unset.
//!
//! Removal is swap-pop, so survivor order is not stable. Anything that
//! removes while iterating must walk indices from high to low.

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use crate::consts::DEFAULT_HEALTH;
use crate::renderer::draw::{Color, DrawCmd};

/// Enemy flavours chosen per wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyVariant {
    #[default]
    Base,
    Fast,
    Boss,
}

/// Closed tag for what an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    /// Projectiles and pickups
    #[default]
    Generic,
    Enemy(EnemyVariant),
}

/// A dynamic entity (enemy, projectile, or pickup)
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    pub health: i32,
    pub health_max: i32,
    pub kind: EntityKind,
    /// Unit travel direction (projectiles only, zero otherwise)
    pub dir: Vec2,
}

impl Entity {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Remaining health as a fraction of max, clamped to [0, 1]
    pub fn health_fraction(&self) -> f32 {
        if self.health_max <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.health_max as f32).clamp(0.0, 1.0)
    }
}

/// Defaults a collection applies to new entities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blueprint {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
    pub kind: EntityKind,
}

/// Per-spawn attribute overrides; `None` means "use the blueprint"
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnOverrides {
    /// Explicit position, only read with [`Placement::Explicit`] (default origin)
    pub pos: Option<Vec2>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub speed: Option<f32>,
    pub color: Option<Color>,
    /// Initial health, also used as max (default 10)
    pub health: Option<i32>,
    pub kind: Option<EntityKind>,
    pub dir: Option<Vec2>,
}

/// Where new entities are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Uniformly random, fully inside the arena
    Random,
    /// Taken from [`SpawnOverrides::pos`]
    Explicit,
}

/// Homogeneous entity collection with blueprint defaults
#[derive(Debug, Clone)]
pub struct Collection {
    pub blueprint: Blueprint,
    items: Vec<Entity>,
}

impl Collection {
    pub fn new(blueprint: Blueprint) -> Self {
        Self {
            blueprint,
            items: Vec::new(),
        }
    }

    /// Append `count` entities sharing one set of overrides
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        placement: Placement,
        overrides: &SpawnOverrides,
        arena: &Arena,
        rng: &mut R,
    ) {
        self.spawn_with(count, placement, arena, rng, |_| *overrides);
    }

    /// Append `count` entities, asking `overrides_for(i)` for each one's overrides
    pub fn spawn_with<R, F>(
        &mut self,
        count: usize,
        placement: Placement,
        arena: &Arena,
        rng: &mut R,
        mut overrides_for: F,
    ) where
        R: Rng + ?Sized,
        F: FnMut(usize) -> SpawnOverrides,
    {
        self.items.reserve(count);
        for i in 0..count {
            let entity = self.build(&overrides_for(i), placement, arena, rng);
            self.items.push(entity);
        }
    }

    fn build<R: Rng + ?Sized>(
        &self,
        o: &SpawnOverrides,
        placement: Placement,
        arena: &Arena,
        rng: &mut R,
    ) -> Entity {
        let bp = &self.blueprint;
        let size = Vec2::new(o.width.unwrap_or(bp.width), o.height.unwrap_or(bp.height));
        let pos = match placement {
            Placement::Random => arena.random_position(rng, size),
            Placement::Explicit => o.pos.unwrap_or(Vec2::ZERO),
        };
        let health = o.health.unwrap_or(DEFAULT_HEALTH);

        Entity {
            pos,
            size,
            speed: o.speed.unwrap_or(bp.speed),
            color: o.color.unwrap_or(bp.color),
            health,
            health_max: health,
            kind: o.kind.unwrap_or(bp.kind),
            dir: o.dir.unwrap_or(Vec2::ZERO),
        }
    }

    /// O(1) removal; the last entity takes the removed slot
    pub fn remove_at(&mut self, index: usize) -> Entity {
        self.items.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.items.get_mut(index)
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.items.iter_mut()
    }

    /// Append a filled rectangle per member
    pub fn render_all(&self, out: &mut Vec<DrawCmd>) {
        out.extend(
            self.items
                .iter()
                .map(|e| DrawCmd::rect(e.pos, e.size, e.color)),
        );
    }
}
