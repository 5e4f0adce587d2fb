//! Kanji Catch - A timed arcade catch game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring, session)
//! - `tuning`: Fixed game balance (glyph table, spawn odds)
//! - `settings`: Runtime preferences for the native driver

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (20 Hz)
    pub const TICK_MS: u64 = 50;
    /// Interval between revealed glyphs on the result screen
    pub const REVEAL_MS: u64 = 100;
    /// Round length in milliseconds
    pub const ROUND_MS: u64 = 60_000;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Collector box edge length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Distance covered by one movement command
    pub const PLAYER_STEP: f32 = 10.0;

    /// Falling glyph box edge bounds (inclusive)
    pub const MIN_GLYPH_SIZE: u32 = 20;
    pub const MAX_GLYPH_SIZE: u32 = 40;

    /// Popup lifetime in milliseconds
    pub const POPUP_TTL_MS: u64 = 500;

    /// Points per motif occurrence in the final sequence
    pub const MOTIF_BONUS: u64 = 50;
}

/// Clamp the top-left corner of a `size` box so the whole box stays in the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: f32) -> Vec2 {
    use consts::{ARENA_HEIGHT, ARENA_WIDTH};
    Vec2::new(
        pos.x.clamp(0.0, ARENA_WIDTH - size),
        pos.y.clamp(0.0, ARENA_HEIGHT - size),
    )
}

/// Whole seconds left for display, rounded up
#[inline]
pub fn display_secs(ms: u64) -> u64 {
    ms.div_ceil(1000)
}
