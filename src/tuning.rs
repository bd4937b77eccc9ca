//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can ship a JSON override
//! without rebuilding. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Width/height/speed/health for one enemy variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: i32,
}

impl EnemyStats {
    pub const fn new(width: f32, height: f32, speed: f32, health: i32) -> Self {
        Self {
            width,
            height,
            speed,
            health,
        }
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena / frame ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Upper clamp on per-frame delta time (seconds)
    pub max_frame_dt: f32,

    // === Avatar ===
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub avatar_speed: f32,
    pub avatar_health: i32,

    // === Projectiles ===
    pub fire_cooldown: f32,
    pub projectile_size: f32,
    pub projectile_speed: f32,
    pub projectile_damage: i32,
    pub cull_margin: f32,

    // === Enemies ===
    pub base_enemy: EnemyStats,
    pub fast_enemy: EnemyStats,
    pub boss_enemy: EnemyStats,

    // === Pickups / damage ===
    pub pickup_size: f32,
    pub contact_damage: i32,
    pub grace_period: f32,

    // === Shop ===
    pub upgrade_cost: u32,
    pub speed_upgrade: f32,
    pub size_upgrade_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            max_frame_dt: MAX_FRAME_DT,

            avatar_width: AVATAR_SIZE,
            avatar_height: AVATAR_SIZE,
            avatar_speed: AVATAR_SPEED,
            avatar_health: AVATAR_HEALTH,

            fire_cooldown: FIRE_COOLDOWN,
            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_damage: PROJECTILE_DAMAGE,
            cull_margin: CULL_MARGIN,

            base_enemy: EnemyStats::new(30.0, 30.0, 90.0, DEFAULT_HEALTH),
            fast_enemy: EnemyStats::new(20.0, 20.0, 170.0, 4),
            boss_enemy: EnemyStats::new(60.0, 60.0, 130.0, 40),

            pickup_size: PICKUP_SIZE,
            contact_damage: CONTACT_DAMAGE,
            grace_period: GRACE_PERIOD,

            upgrade_cost: UPGRADE_COST,
            speed_upgrade: SPEED_UPGRADE,
            size_upgrade_factor: SIZE_UPGRADE_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for shipping an override template)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        non_negative("fire_cooldown", self.fire_cooldown)?;
        non_negative("grace_period", self.grace_period)?;
        non_negative("cull_margin", self.cull_margin)?;
        positive("size_upgrade_factor", self.size_upgrade_factor)?;

        if self.avatar_health <= 0 {
            return Err(invalid("avatar_health", "must be at least 1"));
        }
        if self.upgrade_cost == 0 {
            return Err(invalid("upgrade_cost", "must be at least 1"));
        }

        let sizes = [
            ("avatar", self.avatar_width, self.avatar_height),
            ("base_enemy", self.base_enemy.width, self.base_enemy.height),
            ("fast_enemy", self.fast_enemy.width, self.fast_enemy.height),
            ("boss_enemy", self.boss_enemy.width, self.boss_enemy.height),
            ("projectile_size", self.projectile_size, self.projectile_size),
            ("pickup_size", self.pickup_size, self.pickup_size),
        ];
        for (field, w, h) in sizes {
            if w <= 0.0 || h <= 0.0 {
                return Err(invalid(field, "size must be positive"));
            }
            if w > self.arena_width || h > self.arena_height {
                return Err(invalid(field, format!("{w}x{h} does not fit in the arena")));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {value}")))
    }
}
