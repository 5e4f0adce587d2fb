//! Game state and core simulation types
//!
//! Everything a round mutates lives in `GameState`; the session owns it and
//! only tick callbacks and command handlers write to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Glyph;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    Idle,
    /// Clock running, glyphs falling
    Playing,
    /// Countdown exhausted, result being revealed
    Ended,
}

/// A falling collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingGlyph {
    pub id: u32,
    pub glyph: Glyph,
    /// Units per tick
    pub speed: f32,
    pub base_points: u64,
    /// Top-left corner
    pub pos: Vec2,
    /// Edge length of the square box
    pub size: f32,
    pub rainbow: bool,
}

impl FallingGlyph {
    pub fn new(id: u32, glyph: Glyph, x: f32, size: u32, rainbow: bool) -> Self {
        Self {
            id,
            glyph,
            speed: glyph.speed(),
            base_points: glyph.base_points(),
            pos: Vec2::new(x, 0.0),
            size: size as f32,
            rainbow,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// The player's collector box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, always inside the arena
    pub pos: Vec2,
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Centered on the bottom edge
            pos: Vec2::new((ARENA_WIDTH - PLAYER_SIZE) / 2.0, ARENA_HEIGHT - PLAYER_SIZE),
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Transient "points earned" marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub id: u32,
    pub points: u64,
    /// Player position at catch time
    pub pos: Vec2,
    pub created_at_ms: u64,
}

impl Popup {
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= POPUP_TTL_MS
    }
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// Countdown, never negative
    pub time_remaining_ms: u64,
    /// Virtual time of the last processed event
    pub now_ms: u64,
    pub player: Player,
    /// Live glyphs in spawn order
    pub glyphs: Vec<FallingGlyph>,
    pub popups: Vec<Popup>,
    /// Glyphs caught this round, in catch order
    pub caught: Vec<Glyph>,
    /// Frozen catch sequence, set when the round ends
    pub result_sentence: String,
    pub bonus_points: u64,
    /// Glyphs of `result_sentence` revealed so far
    pub revealed_len: usize,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            time_remaining_ms: ROUND_MS,
            now_ms: 0,
            player: Player::default(),
            glyphs: Vec::new(),
            popups: Vec::new(),
            caught: Vec::new(),
            result_sentence: String::new(),
            bonus_points: 0,
            revealed_len: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear everything a round accumulates. The collector keeps its position.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.time_remaining_ms = ROUND_MS;
        self.glyphs.clear();
        self.popups.clear();
        self.caught.clear();
        self.result_sentence.clear();
        self.bonus_points = 0;
        self.revealed_len = 0;
    }

    /// The part of the result sentence revealed so far
    pub fn revealed_prefix(&self) -> String {
        self.result_sentence.chars().take(self.revealed_len).collect()
    }

    /// Whether the whole result sentence is visible
    pub fn fully_revealed(&self) -> bool {
        self.revealed_len >= self.result_sentence.chars().count()
    }
}
