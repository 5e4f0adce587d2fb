//! Player commands

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::clamp_to_arena;
use crate::consts::PLAYER_STEP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen coordinates (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Inbound commands from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Move(Direction),
}

/// Shift the collector one step, clamped to the arena
pub fn step_player(player: &mut Player, dir: Direction) {
    player.pos = clamp_to_arena(player.pos + dir.delta() * PLAYER_STEP, player.size);
}
