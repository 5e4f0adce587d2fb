//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, on virtual milliseconds
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod motion;
pub mod popup;
pub mod reveal;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Aabb, partition_catches};
pub use input::{Command, Direction};
pub use rng::SpawnRng;
pub use scoring::{Segment, highlight_segments, motif_bonus};
pub use session::Session;
pub use snapshot::Snapshot;
pub use state::{FallingGlyph, GamePhase, GameState, Player, Popup};
pub use tick::{GameEvent, tick};
pub use timer::PeriodicTimer;
