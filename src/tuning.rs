//! Game balance
//!
//! The glyph table and spawn odds are fixed; there is no difficulty curve.

use serde::{Deserialize, Serialize};

/// The three collectible glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// 品 - slow, cheap
    Hin,
    /// 田 - medium
    Ta,
    /// 遊 - fast, valuable
    Yu,
}

impl Glyph {
    /// Spawn table order (uniform pick)
    pub const ALL: [Glyph; 3] = [Glyph::Hin, Glyph::Ta, Glyph::Yu];

    pub fn as_char(self) -> char {
        match self {
            Glyph::Hin => '品',
            Glyph::Ta => '田',
            Glyph::Yu => '遊',
        }
    }

    /// Fall speed in arena units per tick
    pub fn speed(self) -> f32 {
        match self {
            Glyph::Hin => 2.0,
            Glyph::Ta => 3.0,
            Glyph::Yu => 4.0,
        }
    }

    /// Points before the rainbow multiplier
    pub fn base_points(self) -> u64 {
        match self {
            Glyph::Hin => 10,
            Glyph::Ta => 25,
            Glyph::Yu => 50,
        }
    }
}

/// The bonus motif, in catch order
pub const MOTIF: [Glyph; 3] = [Glyph::Hin, Glyph::Ta, Glyph::Yu];

/// Probabilities consulted by the spawner each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Chance that a tick spawns a glyph
    pub spawn_chance: f32,
    /// Chance that a spawned glyph is a rainbow variant
    pub rainbow_chance: f32,
    /// Score multiplier for rainbow glyphs
    pub rainbow_multiplier: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_chance: 0.05,
            rainbow_chance: 0.1,
            rainbow_multiplier: 2,
        }
    }
}

impl Tuning {
    /// Same odds, but nothing ever spawns
    pub fn no_spawns() -> Self {
        Self {
            spawn_chance: 0.0,
            ..Self::default()
        }
    }
}
