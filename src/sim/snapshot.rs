//! Read-only view handed to a renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::popup::visible_popups;
use super::scoring::{Segment, highlight_segments};
use super::state::{FallingGlyph, GamePhase, GameState, Popup};
use crate::display_secs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub time_remaining_ms: u64,
    /// Whole seconds, rounded up for the HUD
    pub time_remaining_secs: u64,
    pub player: Vec2,
    pub glyphs: Vec<FallingGlyph>,
    /// Only popups still inside their TTL
    pub popups: Vec<Popup>,
    pub result_sentence: String,
    pub revealed_prefix: String,
    /// `revealed_prefix` split for motif emphasis
    pub revealed_segments: Vec<Segment>,
    pub bonus_points: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let revealed_prefix = state.revealed_prefix();
        Self {
            phase: state.phase,
            score: state.score,
            time_remaining_ms: state.time_remaining_ms,
            time_remaining_secs: display_secs(state.time_remaining_ms),
            player: state.player.pos,
            glyphs: state.glyphs.clone(),
            popups: visible_popups(&state.popups, state.now_ms),
            result_sentence: state.result_sentence.clone(),
            revealed_segments: highlight_segments(&revealed_prefix),
            revealed_prefix,
            bonus_points: state.bonus_points,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_idle() {
        let snap = Snapshot::capture(&GameState::new());
        assert_eq!(snap.phase, GamePhase::Idle);
        assert_eq!(snap.time_remaining_secs, 60);
        assert!(snap.revealed_segments.is_empty());
    }

    #[test]
    fn test_capture_serializes() {
        let mut state = GameState::new();
        state.result_sentence = "品田遊".into();
        state.revealed_len = 3;
        let json = Snapshot::capture(&state).to_json().unwrap();
        assert!(json.contains("\"revealed_prefix\":\"品田遊\""));
        assert!(json.contains("\"motif\":true"));
    }
}
