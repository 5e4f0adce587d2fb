//! Demo steering for unattended play
//!
//! Picks the lowest glyph that can still be caught and slides toward it
//! along the bottom edge.

use super::input::Direction;
use super::state::GameState;
use crate::consts::{ARENA_HEIGHT, PLAYER_STEP};

/// Suggest the next movement command, if any
pub fn steer(state: &GameState) -> Option<Direction> {
    let player = &state.player;

    // Hug the bottom edge first
    if player.pos.y + player.size < ARENA_HEIGHT {
        return Some(Direction::Down);
    }

    let center = player.pos.x + player.size / 2.0;
    let target = state
        .glyphs
        .iter()
        .filter(|g| g.pos.y < player.pos.y + player.size)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let dx = (target.pos.x + target.size / 2.0) - center;
    if dx.abs() <= PLAYER_STEP / 2.0 {
        None
    } else if dx < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}
