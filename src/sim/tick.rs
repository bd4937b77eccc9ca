//! Per-frame simulation tick
//!
//! Stage order is fixed: later stages read what earlier ones left behind.

use super::collision::resolve_collisions;
use super::input::InputSnapshot;
use super::projectile::advance_projectiles;
use super::state::GameState;
use super::wave::{advance_enemies, check_wave_complete};

/// Wall-clock to simulation delta, clamped against frame hitches
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, capped at `max_dt`
    ///
    /// The first call yields zero. There is no lower clamp: a clock that
    /// runs backwards just produces a non-positive step.
    pub fn delta(&mut self, now_ms: f64, max_dt: f32) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(max_dt)
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &InputSnapshot, dt: f32) {
    state.time_ticks += 1;

    // One-shot keys first so purchases apply to this frame's movement
    state
        .shop
        .update(input, &mut state.avatar, &mut state.score, &state.tuning);

    state.fire_control.update(
        input,
        &state.avatar,
        &mut state.projectiles,
        &state.tuning,
        &state.arena,
        &mut state.rng,
        dt,
    );
    advance_projectiles(
        &mut state.projectiles,
        &state.arena,
        state.tuning.cull_margin,
        dt,
    );

    state.avatar.advance(input, dt, &state.arena);

    let target = state.seek_target();
    advance_enemies(&mut state.enemies, target, &state.arena, dt);

    state.grace_timer = (state.grace_timer - dt).max(0.0);
    resolve_collisions(state);

    // Only after every removal this frame
    check_wave_complete(
        &mut state.score,
        &mut state.enemies,
        &mut state.pickups,
        &state.tuning,
        &state.arena,
        &mut state.rng,
    );
}
