//! Collision resolution between avatar, enemies, projectiles and pickups
//!
//! All tests are axis-aligned box overlaps. Every pass walks its
//! collections from the highest index down because hits remove entities
//! with swap-pop.

use super::avatar::Avatar;
use super::entity::{Collection, Entity};
use super::state::{GameState, Score};
use crate::aabb_overlap;

/// What happened to the avatar in the contact pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// No overlap, or overlap during the grace period
    None,
    /// Took damage and survived
    Hit,
    /// Health reached zero; the run must reset
    Died,
}

fn overlaps(a: &Entity, b: &Entity) -> bool {
    aabb_overlap(a.pos, a.size, b.pos, b.size)
}

/// Projectiles vs enemies
///
/// A projectile is spent on the first enemy it overlaps. Returns the
/// number of enemies killed.
pub fn resolve_projectile_hits(
    projectiles: &mut Collection,
    enemies: &mut Collection,
    damage: i32,
    score: &mut Score,
) -> u32 {
    let mut killed = 0;
    for p in (0..projectiles.len()).rev() {
        let projectile = &projectiles.as_slice()[p];
        let Some(e) = (0..enemies.len())
            .rev()
            .find(|&e| overlaps(projectile, &enemies.as_slice()[e]))
        else {
            continue;
        };

        if let Some(enemy) = enemies.get_mut(e) {
            enemy.health -= damage;
            if enemy.health <= 0 {
                enemies.remove_at(e);
                score.kills += 1;
                killed += 1;
            }
        }
        projectiles.remove_at(p);
    }
    killed
}

/// Avatar vs enemies, gated by the grace timer
///
/// Any overlap counts as a single hit per tick.
pub fn resolve_contact_damage(
    avatar: &mut Avatar,
    enemies: &Collection,
    grace_timer: &mut f32,
    damage: i32,
    grace_period: f32,
) -> ContactOutcome {
    if *grace_timer > 0.0 {
        return ContactOutcome::None;
    }
    let touching = enemies
        .iter()
        .rev()
        .any(|e| aabb_overlap(avatar.pos, avatar.size, e.pos, e.size));
    if !touching {
        return ContactOutcome::None;
    }

    avatar.health -= damage;
    *grace_timer = grace_period;
    if avatar.health <= 0 {
        ContactOutcome::Died
    } else {
        ContactOutcome::Hit
    }
}

/// Avatar vs pickups; each collected pickup pays the coin multiplier
///
/// Returns the number collected.
pub fn collect_pickups(avatar: &Avatar, pickups: &mut Collection, score: &mut Score) -> u32 {
    let mut collected = 0;
    for i in (0..pickups.len()).rev() {
        let pickup = &pickups.as_slice()[i];
        if aabb_overlap(avatar.pos, avatar.size, pickup.pos, pickup.size) {
            pickups.remove_at(i);
            score.coins += score.coin_multiplier;
            collected += 1;
        }
    }
    collected
}

/// Run the three passes in order, resetting the run on death
pub fn resolve_collisions(state: &mut GameState) {
    resolve_projectile_hits(
        &mut state.projectiles,
        &mut state.enemies,
        state.tuning.projectile_damage,
        &mut state.score,
    );

    let outcome = resolve_contact_damage(
        &mut state.avatar,
        &state.enemies,
        &mut state.grace_timer,
        state.tuning.contact_damage,
        state.tuning.grace_period,
    );
    if outcome == ContactOutcome::Died {
        state.reset_run();
    }

    collect_pickups(&state.avatar, &mut state.pickups, &mut state.score);
}
