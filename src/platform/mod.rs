//! Platform abstraction layer
//!
//! Maps browser `KeyboardEvent.key` names onto logical actions and sizes
//! the canvas backbuffer. The host keeps an [`InputSnapshot`] current from
//! keydown/keyup events; edge detection for one-shot actions happens inside
//! the simulation.

use crate::sim::input::{Action, InputSnapshot};

/// Logical action bound to a key name, if any
pub fn key_action(key: &str) -> Option<Action> {
    let action = match key {
        "w" | "W" => Action::MoveUp,
        "s" | "S" => Action::MoveDown,
        "a" | "A" => Action::MoveLeft,
        "d" | "D" => Action::MoveRight,
        "ArrowUp" => Action::AimUp,
        "ArrowDown" => Action::AimDown,
        "ArrowLeft" => Action::AimLeft,
        "ArrowRight" => Action::AimRight,
        "b" | "B" => Action::ShopToggle,
        "1" => Action::ShopSpeed,
        "2" => Action::ShopSize,
        "3" => Action::ShopMultiplier,
        "4" => Action::ShopHeal,
        "Escape" | "q" | "Q" => Action::ShopClose,
        _ => return None,
    };
    Some(action)
}

/// Apply a key event to the held-state snapshot
///
/// Returns true when the key is bound (the host should suppress the
/// browser default, e.g. arrow-key scrolling).
pub fn apply_key(input: &mut InputSnapshot, key: &str, pressed: bool) -> bool {
    match key_action(key) {
        Some(action) => {
            input.set(action, pressed);
            true
        }
        None => false,
    }
}

/// Canvas backbuffer size for a CSS size at a device pixel ratio
///
/// Never zero on either axis, so a collapsed layout still configures.
pub fn backbuffer_size(client_width: i32, client_height: i32, dpr: f64) -> (u32, u32) {
    let scale = |css: i32| ((css.max(0) as f64 * dpr).round() as u32).max(1);
    (scale(client_width), scale(client_height))
}
