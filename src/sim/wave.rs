//! Wave composition, enemy seeking, and wave advancement
//!
//! A wave is nothing more than the current enemy list; its composition is
//! recomputed from the wave number every time one starts.

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::entity::{Collection, EnemyVariant, EntityKind, Placement, SpawnOverrides};
use super::state::Score;
use crate::renderer::draw::colors;
use crate::tuning::{EnemyStats, Tuning};

/// Enemies spawned for wave `n`: `max(1, floor(1.5 n))`
pub fn wave_enemy_count(wave: u32) -> usize {
    ((wave as usize * 3) / 2).max(1)
}

/// Variant of the `index`-th enemy spawned in `wave`
pub fn enemy_variant_for(wave: u32, index: usize) -> EnemyVariant {
    if wave % 5 == 0 && index == 0 {
        EnemyVariant::Boss
    } else if wave % 3 == 0 && index < (wave / 2) as usize {
        EnemyVariant::Fast
    } else {
        EnemyVariant::Base
    }
}

fn variant_overrides(variant: EnemyVariant, tuning: &Tuning) -> SpawnOverrides {
    let (stats, color): (&EnemyStats, _) = match variant {
        EnemyVariant::Base => (&tuning.base_enemy, colors::ENEMY),
        EnemyVariant::Fast => (&tuning.fast_enemy, colors::ENEMY_FAST),
        EnemyVariant::Boss => (&tuning.boss_enemy, colors::ENEMY_BOSS),
    };
    SpawnOverrides {
        width: Some(stats.width),
        height: Some(stats.height),
        speed: Some(stats.speed),
        color: Some(color),
        health: Some(stats.health),
        kind: Some(EntityKind::Enemy(variant)),
        ..Default::default()
    }
}

/// Clear the field and spawn wave `wave`'s enemies and pickups
pub fn start_wave<R: Rng + ?Sized>(
    wave: u32,
    enemies: &mut Collection,
    pickups: &mut Collection,
    tuning: &Tuning,
    arena: &Arena,
    rng: &mut R,
) {
    enemies.clear();
    pickups.clear();

    let count = wave_enemy_count(wave);
    enemies.spawn_with(count, Placement::Random, arena, rng, |i| {
        variant_overrides(enemy_variant_for(wave, i), tuning)
    });
    pickups.spawn(
        wave as usize,
        Placement::Random,
        &SpawnOverrides::default(),
        arena,
        rng,
    );

    log::info!("Wave {} started: {} enemies, {} pickups", wave, count, wave);
}

/// Seek every enemy toward `target` at its own speed, clamped to the arena
pub fn advance_enemies(enemies: &mut Collection, target: Vec2, arena: &Arena, dt: f32) {
    for enemy in enemies.iter_mut() {
        // Zero distance normalizes to zero: no movement this frame
        let dir = (target - enemy.pos).normalize_or_zero();
        enemy.pos += dir * enemy.speed * dt;
        enemy.pos = arena.clamp(enemy.pos, enemy.size);
    }
}

/// Advance to the next wave once every enemy is gone
///
/// Must run once per tick, after collisions. Returns true if a new wave
/// started.
pub fn check_wave_complete<R: Rng + ?Sized>(
    score: &mut Score,
    enemies: &mut Collection,
    pickups: &mut Collection,
    tuning: &Tuning,
    arena: &Arena,
    rng: &mut R,
) -> bool {
    if !enemies.is_empty() {
        return false;
    }
    score.wave += 1;
    start_wave(score.wave, enemies, pickups, tuning, arena, rng);
    true
}
