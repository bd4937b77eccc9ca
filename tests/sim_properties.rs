//! Property tests for simulation invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use wave_survivor::Tuning;
use wave_survivor::sim::shop::purchase;
use wave_survivor::sim::{
    Action, Arena, Avatar, EnemyVariant, GameState, InputSnapshot, Score, ShopOption,
    enemy_variant_for, tick, wave_enemy_count,
};
use wave_survivor::{aabb_overlap, random_int};

const EPS: f32 = 1e-3;

/// Decode a bitmask into held actions (one bit per [`Action::ALL`] entry)
fn snapshot(mask: u16) -> InputSnapshot {
    let held: Vec<Action> = Action::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, a)| *a)
        .collect();
    InputSnapshot::with(&held)
}

fn in_bounds(arena: &Arena, pos: glam::Vec2, size: glam::Vec2) -> bool {
    pos.x >= -EPS
        && pos.y >= -EPS
        && pos.x + size.x <= arena.width + EPS
        && pos.y + size.y <= arena.height + EPS
}

fn shop_option() -> impl Strategy<Value = ShopOption> {
    prop::sample::select(ShopOption::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_avatar_and_enemies_stay_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec((any::<u16>(), 0.0f32..0.05), 1..200),
    ) {
        let mut state = GameState::new(Tuning::default(), seed);
        for (mask, dt) in frames {
            tick(&mut state, &snapshot(mask), dt);
            prop_assert!(in_bounds(&state.arena, state.avatar.pos, state.avatar.size));
            for enemy in state.enemies.iter() {
                prop_assert!(in_bounds(&state.arena, enemy.pos, enemy.size));
            }
        }
    }

    #[test]
    fn test_size_upgrades_keep_avatar_in_bounds(
        seed in any::<u64>(),
        buys in 1usize..60,
        moves in prop::collection::vec(any::<u16>(), 1..30),
    ) {
        let mut state = GameState::new(Tuning::default(), seed);
        state.score.coins = 100_000;
        tick(&mut state, &InputSnapshot::with(&[Action::ShopToggle]), 0.0);
        tick(&mut state, &InputSnapshot::new(), 0.0);
        prop_assert!(state.shop.is_open());

        let size_key = InputSnapshot::with(&[Action::ShopSize]);
        for _ in 0..buys {
            tick(&mut state, &size_key, 0.0);
            tick(&mut state, &InputSnapshot::new(), 0.0);
        }
        prop_assert!(state.avatar.size.y <= state.arena.height);

        for mask in moves {
            // Movement and aim keys only
            tick(&mut state, &snapshot(mask & 0x00ff), 0.05);
            prop_assert!(in_bounds(&state.arena, state.avatar.pos, state.avatar.size));
        }
    }

    #[test]
    fn test_wave_size_formula(wave in 1u32..10_000) {
        let expected = ((wave as f64 * 1.5).floor() as usize).max(1);
        prop_assert_eq!(wave_enemy_count(wave), expected);
    }

    #[test]
    fn test_boss_only_leads_every_fifth_wave(wave in 1u32..500, index in 0usize..800) {
        let variant = enemy_variant_for(wave, index);
        if variant == EnemyVariant::Boss {
            prop_assert_eq!(index, 0);
            prop_assert_eq!(wave % 5, 0);
        }
        if variant == EnemyVariant::Fast {
            prop_assert_eq!(wave % 3, 0);
            prop_assert!(index < (wave / 2) as usize);
        }
    }

    #[test]
    fn test_purchases_never_overdraw(
        coins in 0u32..200,
        options in prop::collection::vec(shop_option(), 0..20),
    ) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.arena_width, tuning.arena_height);
        let mut avatar = Avatar::new(&tuning, &arena);
        let mut score = Score { coins, ..Score::default() };

        for option in options {
            let before = score.coins;
            let bought = purchase(option, &mut avatar, &mut score, &tuning);
            prop_assert_eq!(bought, before >= tuning.upgrade_cost);
            if bought {
                prop_assert_eq!(score.coins, before - tuning.upgrade_cost);
            } else {
                prop_assert_eq!(score.coins, before);
            }
        }
    }

    #[test]
    fn test_random_int_in_range(seed in any::<u64>(), min in -500.0f32..500.0, span in 0.0f32..500.0) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let max = min + span;
        let v = random_int(&mut rng, min, max);
        prop_assert_eq!(v.fract(), 0.0);
        if max.floor() > min.ceil() {
            prop_assert!(v >= min.ceil() && v <= max.floor());
        } else {
            prop_assert_eq!(v, min.ceil());
        }
    }

    #[test]
    fn test_overlap_is_symmetric(
        ax in 0.0f32..100.0, ay in 0.0f32..100.0,
        bx in 0.0f32..100.0, by in 0.0f32..100.0,
        w in 1.0f32..50.0, h in 1.0f32..50.0,
    ) {
        let a = glam::Vec2::new(ax, ay);
        let b = glam::Vec2::new(bx, by);
        let size = glam::Vec2::new(w, h);
        prop_assert_eq!(aabb_overlap(a, size, b, size), aabb_overlap(b, size, a, size));
        prop_assert!(aabb_overlap(a, size, a, size));
    }
}
