//! Fire control and projectile flight

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::avatar::Avatar;
use super::entity::{Collection, Placement, SpawnOverrides};
use super::input::{Action, InputSnapshot};
use crate::tuning::Tuning;

/// Aim keys in firing priority order
const AIM_PRIORITY: [(Action, Vec2); 4] = [
    (Action::AimRight, Vec2::X),
    (Action::AimLeft, Vec2::NEG_X),
    (Action::AimUp, Vec2::NEG_Y),
    (Action::AimDown, Vec2::Y),
];

/// Single cardinal direction from the aim keys, highest priority wins
pub fn fire_direction(input: &InputSnapshot) -> Option<Vec2> {
    AIM_PRIORITY
        .iter()
        .find(|(action, _)| input.is_held(*action))
        .map(|&(_, dir)| dir)
}

/// Cooldown-gated gun
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireControl {
    /// Seconds until the next shot; may dip below zero
    pub timer: f32,
}

impl FireControl {
    /// Fire if aiming and ready, otherwise run the cooldown down by `dt`
    ///
    /// Returns true when a projectile was spawned.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        input: &InputSnapshot,
        avatar: &Avatar,
        projectiles: &mut Collection,
        tuning: &Tuning,
        arena: &Arena,
        rng: &mut R,
        dt: f32,
    ) -> bool {
        match fire_direction(input) {
            Some(dir) if self.timer <= 0.0 => {
                let size = Vec2::new(projectiles.blueprint.width, projectiles.blueprint.height);
                let overrides = SpawnOverrides {
                    pos: Some(avatar.center() - size * 0.5),
                    dir: Some(dir),
                    ..Default::default()
                };
                projectiles.spawn(1, Placement::Explicit, &overrides, arena, rng);
                self.timer = tuning.fire_cooldown;
                log::debug!("Projectile fired {:?}", dir);
                true
            }
            _ => {
                self.timer -= dt;
                false
            }
        }
    }
}

/// Move every projectile along its direction and cull the ones that left
pub fn advance_projectiles(projectiles: &mut Collection, arena: &Arena, margin: f32, dt: f32) {
    for p in projectiles.iter_mut() {
        p.pos += p.dir * p.speed * dt;
    }
    for i in (0..projectiles.len()).rev() {
        if arena.is_beyond(projectiles.as_slice()[i].pos, margin) {
            projectiles.remove_at(i);
        }
    }
}
