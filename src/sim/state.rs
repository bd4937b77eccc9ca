//! Simulation root and run-level counters
//!
//! Everything the tick mutates lives in [`GameState`]; subsystems get the
//! fields they need by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::avatar::Avatar;
use super::entity::{Blueprint, Collection, EntityKind};
use super::projectile::FireControl;
use super::shop::Shop;
use super::wave;
use crate::renderer::draw::colors;
use crate::tuning::Tuning;

/// Per-run counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub kills: u32,
    /// Current wave (starts at 1)
    pub wave: u32,
    pub coins: u32,
    /// Coins added per pickup
    pub coin_multiplier: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            kills: 0,
            wave: 1,
            coins: 0,
            coin_multiplier: 1,
        }
    }
}

/// Read-only values for the HUD collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub kills: u32,
    pub wave: u32,
    pub coins: u32,
    pub coin_multiplier: u32,
    pub health: i32,
    pub health_max: i32,
    pub shop_open: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub arena: Arena,
    pub avatar: Avatar,
    pub enemies: Collection,
    pub projectiles: Collection,
    pub pickups: Collection,
    pub score: Score,
    pub fire_control: FireControl,
    /// Seconds of contact-damage immunity left
    pub grace_timer: f32,
    pub shop: Shop,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// New run with wave 1 already spawned
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let arena = Arena::new(tuning.arena_width, tuning.arena_height);
        let avatar = Avatar::new(&tuning, &arena);

        let enemies = Collection::new(Blueprint {
            width: tuning.base_enemy.width,
            height: tuning.base_enemy.height,
            speed: tuning.base_enemy.speed,
            color: colors::ENEMY,
            kind: EntityKind::Enemy(Default::default()),
        });
        let projectiles = Collection::new(Blueprint {
            width: tuning.projectile_size,
            height: tuning.projectile_size,
            speed: tuning.projectile_speed,
            color: colors::PROJECTILE,
            kind: EntityKind::Generic,
        });
        let pickups = Collection::new(Blueprint {
            width: tuning.pickup_size,
            height: tuning.pickup_size,
            speed: 0.0,
            color: colors::PICKUP,
            kind: EntityKind::Generic,
        });

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            arena,
            avatar,
            enemies,
            projectiles,
            pickups,
            score: Score::default(),
            fire_control: FireControl::default(),
            grace_timer: 0.0,
            shop: Shop::default(),
            time_ticks: 0,
        };
        state.start_wave(state.score.wave);
        state
    }

    /// Respawn the field for `wave`
    pub fn start_wave(&mut self, wave: u32) {
        wave::start_wave(
            wave,
            &mut self.enemies,
            &mut self.pickups,
            &self.tuning,
            &self.arena,
            &mut self.rng,
        );
    }

    /// Death: restore health, reset run counters, start wave 1
    ///
    /// The avatar keeps its position and bought upgrades, including the
    /// coin multiplier.
    pub fn reset_run(&mut self) {
        log::info!(
            "Run over at wave {} with {} kills, resetting",
            self.score.wave,
            self.score.kills
        );
        self.avatar.health = self.avatar.health_max;
        self.score = Score {
            coin_multiplier: self.score.coin_multiplier,
            ..Score::default()
        };
        self.start_wave(self.score.wave);
    }

    /// Avatar reference point enemies seek toward
    pub fn seek_target(&self) -> Vec2 {
        self.avatar.pos
    }

    pub fn hud(&self) -> Hud {
        Hud {
            kills: self.score.kills,
            wave: self.score.wave,
            coins: self.score.coins,
            coin_multiplier: self.score.coin_multiplier,
            health: self.avatar.health,
            health_max: self.avatar.health_max,
            shop_open: self.shop.is_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_wave_one() {
        let state = GameState::new(Tuning::default(), 12345);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.pickups.len(), 1);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.avatar.health, 10);
        assert!(!state.shop.is_open());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = GameState::new(Tuning::default(), 99);
        let b = GameState::new(Tuning::default(), 99);
        assert_eq!(a.enemies.as_slice(), b.enemies.as_slice());
        assert_eq!(a.pickups.as_slice(), b.pickups.as_slice());
    }

    #[test]
    fn test_reset_run_keeps_position_and_multiplier() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.avatar.pos = Vec2::new(100.0, 200.0);
        state.avatar.health = 0;
        state.score = Score {
            kills: 12,
            wave: 6,
            coins: 40,
            coin_multiplier: 3,
        };
        state.start_wave(6);

        state.reset_run();

        assert_eq!(state.avatar.pos, Vec2::new(100.0, 200.0));
        assert_eq!(state.avatar.health, state.avatar.health_max);
        assert_eq!(state.score.kills, 0);
        assert_eq!(state.score.wave, 1);
        assert_eq!(state.score.coins, 0);
        assert_eq!(state.score.coin_multiplier, 3);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.pickups.len(), 1);
    }

    #[test]
    fn test_hud_mirrors_state() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.score.kills = 4;
        state.score.coins = 9;
        let hud = state.hud();
        assert_eq!(hud.kills, 4);
        assert_eq!(hud.coins, 9);
        assert_eq!(hud.wave, 1);
        assert_eq!(hud.health, 10);
        assert!(!hud.shop_open);

        let json = serde_json::to_string(&hud).expect("serializes");
        assert!(json.contains("\"kills\":4"));
    }
}
