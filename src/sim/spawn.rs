//! Stochastic glyph spawning

use super::rng::SpawnRng;
use super::state::{FallingGlyph, GameState};
use crate::consts::*;
use crate::tuning::{Glyph, Tuning};

/// Roll for a new glyph; spawns at most one per call.
///
/// Draw order: spawn decision, glyph type, x, size, rainbow flag.
pub fn maybe_spawn<R: SpawnRng + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<u32> {
    if !rng.chance(tuning.spawn_chance) {
        return None;
    }

    let glyph = Glyph::ALL[rng.index(Glyph::ALL.len())];
    // x in [0, W - max size) so even the largest glyph fits
    let x = rng.unit() * (ARENA_WIDTH - MAX_GLYPH_SIZE as f32);
    let size = rng.int_inclusive(MIN_GLYPH_SIZE, MAX_GLYPH_SIZE);
    let rainbow = rng.chance(tuning.rainbow_chance);

    let id = state.next_entity_id();
    state
        .glyphs
        .push(FallingGlyph::new(id, glyph, x, size, rainbow));
    log::trace!("Spawned {:?} #{} at x={:.1} size={}", glyph, id, x, size);
    Some(id)
}
