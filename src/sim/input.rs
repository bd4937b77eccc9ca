//! Logical input actions and the per-tick key-state snapshot
//!
//! The host owns raw key events; the simulation only reads which actions
//! are currently held.

/// Every action the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    AimUp,
    AimDown,
    AimLeft,
    AimRight,
    ShopToggle,
    ShopSpeed,
    ShopSize,
    ShopMultiplier,
    ShopHeal,
    ShopClose,
}

impl Action {
    pub const COUNT: usize = 14;

    pub const ALL: [Action; Action::COUNT] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::AimUp,
        Action::AimDown,
        Action::AimLeft,
        Action::AimRight,
        Action::ShopToggle,
        Action::ShopSpeed,
        Action::ShopSize,
        Action::ShopMultiplier,
        Action::ShopHeal,
        Action::ShopClose,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Held/not-held state for each action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: [bool; Action::COUNT],
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given actions held
    pub fn with(actions: &[Action]) -> Self {
        let mut snapshot = Self::new();
        for &action in actions {
            snapshot.set(action, true);
        }
        snapshot
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.held = [false; Action::COUNT];
    }

    /// -1, 0 or +1 from a pair of opposing actions
    pub fn axis(&self, negative: Action, positive: Action) -> f32 {
        match (self.is_held(negative), self.is_held(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
