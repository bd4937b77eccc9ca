//! End-to-end run scenarios driven through the public tick API

use glam::Vec2;
use wave_survivor::Tuning;
use wave_survivor::sim::{
    Action, EnemyVariant, EntityKind, GameState, InputSnapshot, Placement, SpawnOverrides, tick,
};

fn state(seed: u64) -> GameState {
    GameState::new(Tuning::default(), seed)
}

/// Replace the field with one explicitly placed enemy
fn lone_enemy(state: &mut GameState, pos: Vec2, health: i32) {
    state.enemies.clear();
    state.pickups.clear();
    let overrides = SpawnOverrides {
        pos: Some(pos),
        health: Some(health),
        ..Default::default()
    };
    state.enemies.spawn(
        1,
        Placement::Explicit,
        &overrides,
        &state.arena,
        &mut state.rng,
    );
}

fn shot_at(state: &mut GameState, pos: Vec2) {
    let overrides = SpawnOverrides {
        pos: Some(pos),
        ..Default::default()
    };
    state.projectiles.spawn(
        1,
        Placement::Explicit,
        &overrides,
        &state.arena,
        &mut state.rng,
    );
}

#[test]
fn test_diagonal_moves_at_base_speed() {
    let mut state = state(1);
    let start = state.avatar.pos;
    let input = InputSnapshot::with(&[Action::MoveUp, Action::MoveRight]);
    tick(&mut state, &input, 1.0);

    let step = 270.0 / 2.0_f32.sqrt();
    let moved = state.avatar.pos - start;
    assert!((moved.x - step).abs() < 1e-3);
    assert!((moved.y + step).abs() < 1e-3);
    assert!((moved.length() - 270.0).abs() < 1e-3);
}

#[test]
fn test_cooldown_blocks_second_shot() {
    let mut state = state(2);
    let aim = InputSnapshot::with(&[Action::AimRight]);
    let fire = |state: &mut GameState, dt: f32| {
        state.fire_control.update(
            &aim,
            &state.avatar,
            &mut state.projectiles,
            &state.tuning,
            &state.arena,
            &mut state.rng,
            dt,
        )
    };

    assert!(fire(&mut state, 0.016));
    assert!(!fire(&mut state, 0.1));
    assert!(!fire(&mut state, 0.1));
    // 0.2 s have elapsed since the shot
    assert!(fire(&mut state, 0.016));
    assert!(!fire(&mut state, 0.016));
    assert_eq!(state.projectiles.len(), 2);
}

#[test]
fn test_wave_five_leads_with_boss() {
    let mut state = state(3);
    state.start_wave(5);
    assert_eq!(state.enemies.len(), 7);
    let boss = &state.enemies.as_slice()[0];
    assert_eq!(boss.kind, EntityKind::Enemy(EnemyVariant::Boss));
    assert_eq!(boss.size, Vec2::splat(60.0));
    assert_eq!(boss.health, 40);
    assert_eq!(state.pickups.len(), 5);
}

#[test]
fn test_wave_three_has_one_fast_enemy() {
    let mut state = state(4);
    state.start_wave(3);
    assert_eq!(state.enemies.len(), 4);
    let kinds: Vec<EntityKind> = state.enemies.iter().map(|e| e.kind).collect();
    assert_eq!(kinds[0], EntityKind::Enemy(EnemyVariant::Fast));
    assert!(
        kinds[1..]
            .iter()
            .all(|k| *k == EntityKind::Enemy(EnemyVariant::Base))
    );
}

#[test]
fn test_lethal_shot_kills_and_advances_wave() {
    let mut state = state(5);
    lone_enemy(&mut state, Vec2::new(100.0, 100.0), 2);
    shot_at(&mut state, Vec2::new(110.0, 110.0));

    tick(&mut state, &InputSnapshot::new(), 0.0);

    assert_eq!(state.score.kills, 1);
    assert!(state.projectiles.is_empty());
    // Field was empty after collisions, so wave 2 spawned in the same tick
    assert_eq!(state.score.wave, 2);
    assert_eq!(state.enemies.len(), 3);
}

#[test]
fn test_non_lethal_shot_only_spends_projectile() {
    let mut state = state(6);
    lone_enemy(&mut state, Vec2::new(100.0, 100.0), 5);
    shot_at(&mut state, Vec2::new(110.0, 110.0));

    tick(&mut state, &InputSnapshot::new(), 0.0);

    assert_eq!(state.score.kills, 0);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.enemies.len(), 1);
    assert_eq!(state.enemies.as_slice()[0].health, 3);
}

#[test]
fn test_ten_hits_reset_the_run() {
    let mut state = state(7);
    let avatar_pos = state.avatar.pos;
    lone_enemy(&mut state, avatar_pos, 10);
    state.score.kills = 3;
    state.score.coins = 7;
    state.score.wave = 4;

    // A full grace period passes every tick, so each tick lands one hit
    for hit in 1..10 {
        tick(&mut state, &InputSnapshot::new(), 1.0);
        assert_eq!(state.avatar.health, 10 - hit);
    }
    tick(&mut state, &InputSnapshot::new(), 1.0);

    assert_eq!(state.avatar.health, 10);
    assert_eq!(state.avatar.pos, avatar_pos);
    assert_eq!(state.score.kills, 0);
    assert_eq!(state.score.wave, 1);
    // Only a fresh pickup landing on the avatar could have paid out since
    assert!(state.score.coins <= state.score.coin_multiplier);
    assert_eq!(state.enemies.len(), 1);
    assert!(state.pickups.len() <= 1);
}

fn open_shop(state: &mut GameState) {
    tick(state, &InputSnapshot::with(&[Action::ShopToggle]), 0.0);
    tick(state, &InputSnapshot::new(), 0.0);
    assert!(state.shop.is_open());
}

#[test]
fn test_exact_balance_buys_upgrade() {
    let mut state = state(8);
    state.pickups.clear();
    state.score.coins = 25;
    open_shop(&mut state);

    tick(&mut state, &InputSnapshot::with(&[Action::ShopSpeed]), 0.0);
    assert_eq!(state.score.coins, 0);
    assert_eq!(state.avatar.speed, 280.0);
}

#[test]
fn test_short_balance_changes_nothing() {
    let mut state = state(9);
    state.pickups.clear();
    state.score.coins = 24;
    open_shop(&mut state);
    let avatar = state.avatar.clone();

    for option in [Action::ShopSpeed, Action::ShopSize, Action::ShopMultiplier] {
        tick(&mut state, &InputSnapshot::with(&[option]), 0.0);
        tick(&mut state, &InputSnapshot::new(), 0.0);
    }
    assert_eq!(state.score.coins, 24);
    assert_eq!(state.score.coin_multiplier, 1);
    assert_eq!(state.avatar.speed, avatar.speed);
    assert_eq!(state.avatar.size, avatar.size);
}

#[test]
fn test_held_toggle_opens_shop_once() {
    let mut state = state(10);
    let held = InputSnapshot::with(&[Action::ShopToggle]);
    for _ in 0..100 {
        tick(&mut state, &held, 0.016);
        assert!(state.shop.is_open());
    }
    tick(&mut state, &InputSnapshot::new(), 0.016);
    tick(&mut state, &held, 0.016);
    assert!(!state.shop.is_open());
}

#[test]
fn test_option_key_held_fires_once() {
    let mut state = state(11);
    state.pickups.clear();
    state.score.coins = 100;
    open_shop(&mut state);

    let held = InputSnapshot::with(&[Action::ShopMultiplier]);
    for _ in 0..30 {
        tick(&mut state, &held, 0.0);
    }
    assert_eq!(state.score.coins, 75);
    assert_eq!(state.score.coin_multiplier, 2);
}
