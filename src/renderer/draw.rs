//! Declarative per-frame draw list
//!
//! The simulation emits plain draw commands in back-to-front order; the GPU
//! pipeline and the HUD overlay consume them without keeping any state.

use glam::Vec2;

use crate::sim::GameState;
use crate::sim::shop::ShopOption;

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.05, 0.05, 0.08, 1.0];
    pub const AVATAR: Color = [0.2, 0.8, 0.4, 1.0];
    pub const ENEMY: Color = [0.9, 0.25, 0.25, 1.0];
    pub const ENEMY_FAST: Color = [1.0, 0.6, 0.2, 1.0];
    pub const ENEMY_BOSS: Color = [0.6, 0.2, 0.8, 1.0];
    pub const PROJECTILE: Color = [1.0, 1.0, 0.6, 1.0];
    pub const PICKUP: Color = [0.95, 0.8, 0.2, 1.0];
    pub const HEALTH_BACK: Color = [0.25, 0.05, 0.05, 1.0];
    pub const HEALTH_FILL: Color = [0.3, 0.9, 0.3, 1.0];
    pub const SHOP_PANEL: Color = [0.08, 0.08, 0.15, 0.92];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_DIM: Color = [0.55, 0.55, 0.6, 1.0];
}

/// Health bar geometry (above the owner)
const BAR_HEIGHT: f32 = 5.0;
const BAR_GAP: f32 = 4.0;

/// Shop panel geometry
const PANEL_SIZE: Vec2 = Vec2::new(420.0, 260.0);
const LABEL_SIZE: f32 = 22.0;
const LABEL_SPACING: f32 = 40.0;

/// One draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled axis-aligned rectangle (top-left + size)
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Text handed to the glyph renderer
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

impl DrawCmd {
    pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Self {
        DrawCmd::Rect { pos, size, color }
    }

    pub fn text(text: impl Into<String>, pos: Vec2, size: f32, color: Color) -> Self {
        DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            color,
        }
    }
}

/// Background + fill rectangles for a health bar above a box
fn health_bar(out: &mut Vec<DrawCmd>, pos: Vec2, width: f32, fraction: f32) {
    let bar_pos = pos - Vec2::new(0.0, BAR_GAP + BAR_HEIGHT);
    out.push(DrawCmd::rect(
        bar_pos,
        Vec2::new(width, BAR_HEIGHT),
        colors::HEALTH_BACK,
    ));
    out.push(DrawCmd::rect(
        bar_pos,
        Vec2::new(width * fraction.clamp(0.0, 1.0), BAR_HEIGHT),
        colors::HEALTH_FILL,
    ));
}

/// Build this frame's draw list
///
/// Order: pickups, enemies, projectiles, avatar, avatar health bar, enemy
/// health bars, then the shop overlay when open.
pub fn build_frame(state: &GameState) -> Vec<DrawCmd> {
    let mut out = Vec::with_capacity(
        state.pickups.len() + state.enemies.len() * 3 + state.projectiles.len() + 16,
    );

    state.pickups.render_all(&mut out);
    state.enemies.render_all(&mut out);
    state.projectiles.render_all(&mut out);

    let avatar = &state.avatar;
    out.push(DrawCmd::rect(avatar.pos, avatar.size, avatar.color));
    let avatar_fraction = if avatar.health_max > 0 {
        avatar.health as f32 / avatar.health_max as f32
    } else {
        0.0
    };
    health_bar(&mut out, avatar.pos, avatar.size.x, avatar_fraction);

    for enemy in state.enemies.iter() {
        health_bar(&mut out, enemy.pos, enemy.size.x, enemy.health_fraction());
    }

    if state.shop.is_open() {
        shop_overlay(&mut out, state);
    }

    out
}

fn shop_overlay(out: &mut Vec<DrawCmd>, state: &GameState) {
    let panel_pos = state.arena.center() - PANEL_SIZE * 0.5;
    out.push(DrawCmd::rect(panel_pos, PANEL_SIZE, colors::SHOP_PANEL));

    let cost = state.tuning.upgrade_cost;
    let affordable = state.score.coins >= cost;
    let left = panel_pos.x + 24.0;
    let mut y = panel_pos.y + 32.0;
    for (i, option) in ShopOption::ALL.iter().enumerate() {
        let color = if affordable {
            colors::TEXT
        } else {
            colors::TEXT_DIM
        };
        let label = format!("[{}] {} - {} coins", i + 1, option.label(), cost);
        out.push(DrawCmd::text(label, Vec2::new(left, y), LABEL_SIZE, color));
        y += LABEL_SPACING;
    }

    out.push(DrawCmd::text(
        format!("Coins: {}", state.score.coins),
        Vec2::new(left, y + 12.0),
        LABEL_SIZE,
        colors::PICKUP,
    ));
}

/// Text commands only (for the HUD/text overlay)
pub fn text_commands(cmds: &[DrawCmd]) -> impl Iterator<Item = &DrawCmd> {
    cmds.iter().filter(|c| matches!(c, DrawCmd::Text { .. }))
}
