//! Fixed timestep simulation tick
//!
//! One call advances a playing round by `TICK_MS`. Stage order is fixed:
//! motion, collision, scoring, popups, spawning, countdown.

use serde::{Deserialize, Serialize};

use super::collision::partition_catches;
use super::motion::fall;
use super::popup::{expire_popups, spawn_popup};
use super::rng::SpawnRng;
use super::scoring::catch_points;
use super::spawn::maybe_spawn;
use super::state::{GamePhase, GameState};
use crate::consts::TICK_MS;
use crate::tuning::{Glyph, Tuning};

/// Things that happened during a tick, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Caught { id: u32, glyph: Glyph, points: u64 },
    Spawned { id: u32 },
    /// Countdown hit zero this tick
    RoundEnded,
}

/// Advance the round by one fixed timestep
pub fn tick<R: SpawnRng + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Ticks only exist while playing
    if state.phase != GamePhase::Playing {
        return events;
    }

    // Glyphs leaving the arena are gone before they can be caught
    fall(&mut state.glyphs);

    // Collector position as of the start of this tick
    let player = state.player;
    let glyphs = std::mem::take(&mut state.glyphs);
    let (caught, remaining) = partition_catches(glyphs, &player.bounds());
    state.glyphs = remaining;

    let mut awarded = Vec::with_capacity(caught.len());
    for glyph in &caught {
        let points = catch_points(glyph, tuning);
        state.score += points;
        state.caught.push(glyph.glyph);
        awarded.push(points);
        log::debug!(
            "Caught {} #{} for {} (rainbow: {})",
            glyph.glyph.as_char(),
            glyph.id,
            points,
            glyph.rainbow
        );
        events.push(GameEvent::Caught {
            id: glyph.id,
            glyph: glyph.glyph,
            points,
        });
    }

    expire_popups(state);
    for points in awarded {
        spawn_popup(state, points, player.pos);
    }

    if let Some(id) = maybe_spawn(state, tuning, rng) {
        events.push(GameEvent::Spawned { id });
    }

    state.time_remaining_ms = state.time_remaining_ms.saturating_sub(TICK_MS);
    if state.time_remaining_ms == 0 {
        events.push(GameEvent::RoundEnded);
    }

    events
}
