//! Transient point popups
//!
//! Popups are observational only; nothing in the simulation reads them back.

use glam::Vec2;

use super::state::{GameState, Popup};

/// Record a popup for `points` at the collector's current position
pub fn spawn_popup(state: &mut GameState, points: u64, pos: Vec2) -> u32 {
    let id = state.next_entity_id();
    state.popups.push(Popup {
        id,
        points,
        pos,
        created_at_ms: state.now_ms,
    });
    id
}

/// Drop popups that have reached their TTL
pub fn expire_popups(state: &mut GameState) {
    let now = state.now_ms;
    state.popups.retain(|p| !p.expired(now));
}

/// Popups still alive at `now_ms`
pub fn visible_popups(popups: &[Popup], now_ms: u64) -> Vec<Popup> {
    popups.iter().filter(|p| !p.expired(now_ms)).cloned().collect()
}
