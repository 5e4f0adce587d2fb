//! Falling motion

use super::state::FallingGlyph;
use crate::consts::ARENA_HEIGHT;

/// Advance every glyph by its speed and drop those past the arena bottom.
///
/// Returns how many glyphs fell out.
pub fn fall(glyphs: &mut Vec<FallingGlyph>) -> usize {
    for g in glyphs.iter_mut() {
        g.pos.y += g.speed;
    }
    let before = glyphs.len();
    glyphs.retain(|g| g.pos.y < ARENA_HEIGHT);
    before - glyphs.len()
}
