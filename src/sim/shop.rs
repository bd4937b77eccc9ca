//! Upgrade shop state machine
//!
//! Closed ⇄ open on each press of the toggle key. While open, each option
//! key buys once per press if the balance covers the cost; otherwise the
//! press is silently ignored.

use super::avatar::Avatar;
use super::input::{Action, InputSnapshot};
use super::latch::EdgeLatch;
use super::state::Score;
use crate::tuning::Tuning;

/// Purchasable upgrades, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOption {
    /// Flat movement speed bonus
    Speed,
    /// Grow both dimensions by the size factor
    Size,
    /// +1 coin per pickup
    Multiplier,
    /// Restore health to max
    Heal,
}

impl ShopOption {
    pub const ALL: [ShopOption; 4] = [
        ShopOption::Speed,
        ShopOption::Size,
        ShopOption::Multiplier,
        ShopOption::Heal,
    ];

    /// Key bound to this option
    pub fn action(self) -> Action {
        match self {
            ShopOption::Speed => Action::ShopSpeed,
            ShopOption::Size => Action::ShopSize,
            ShopOption::Multiplier => Action::ShopMultiplier,
            ShopOption::Heal => Action::ShopHeal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShopOption::Speed => "Speed +10",
            ShopOption::Size => "Size +10%",
            ShopOption::Multiplier => "Coin multiplier +1",
            ShopOption::Heal => "Full heal",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Result of one shop update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShopEvents {
    pub toggled: bool,
    pub purchased: Option<ShopOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shop {
    open: bool,
    toggle: EdgeLatch,
    options: [EdgeLatch; 4],
    close: EdgeLatch,
}

impl Shop {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Consume this tick's shop keys
    ///
    /// Latches see every tick, open or not, so a key held while the shop
    /// opens still needs a fresh press.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        avatar: &mut Avatar,
        score: &mut Score,
        tuning: &Tuning,
    ) -> ShopEvents {
        let mut events = ShopEvents::default();

        if self.toggle.rising(input.is_held(Action::ShopToggle)) {
            self.open = !self.open;
            events.toggled = true;
            log::info!("Shop {}", if self.open { "opened" } else { "closed" });
        }

        for option in ShopOption::ALL {
            let pressed = self.options[option.index()].rising(input.is_held(option.action()));
            if pressed && self.open && purchase(option, avatar, score, tuning) {
                events.purchased = Some(option);
            }
        }

        if self.close.rising(input.is_held(Action::ShopClose)) && self.open {
            self.open = false;
            events.toggled = true;
            log::info!("Shop closed");
        }

        events
    }
}

/// Spend `upgrade_cost` coins on `option`
///
/// False, with nothing charged, if the balance is short or a size upgrade
/// would no longer fit in the arena.
pub fn purchase(
    option: ShopOption,
    avatar: &mut Avatar,
    score: &mut Score,
    tuning: &Tuning,
) -> bool {
    let cost = tuning.upgrade_cost;
    if score.coins < cost {
        log::debug!(
            "Can't afford {:?}: {} coins, need {}",
            option,
            score.coins,
            cost
        );
        return false;
    }

    // Each axis rounds on its own; repeated buys can drift the aspect
    let grown = (avatar.size * tuning.size_upgrade_factor).round();
    if option == ShopOption::Size
        && (grown.x > tuning.arena_width || grown.y > tuning.arena_height)
    {
        log::debug!("Size upgrade to {} would not fit the arena", grown);
        return false;
    }
    score.coins -= cost;

    match option {
        ShopOption::Speed => avatar.speed += tuning.speed_upgrade,
        ShopOption::Size => avatar.size = grown,
        ShopOption::Multiplier => score.coin_multiplier += 1,
        ShopOption::Heal => avatar.health = avatar.health_max,
    }

    log::info!("Bought {:?}, {} coins left", option, score.coins);
    true
}
