//! Collision detection between the collector and falling glyphs
//!
//! Boxes overlap only when their interiors intersect; touching edges do not
//! count as a catch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::FallingGlyph;

/// Axis-aligned box given by its top-left corner and extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn square(min: Vec2, edge: f32) -> Self {
        Self::new(min, Vec2::splat(edge))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Open-interval overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        other.min.x < a_max.x
            && b_max.x > self.min.x
            && other.min.y < a_max.y
            && b_max.y > self.min.y
    }
}

/// Split glyphs into (caught, remaining) by overlap with `player`.
///
/// Both halves keep spawn order, and the split is by index so glyphs with
/// identical attributes are never confused.
pub fn partition_catches(
    glyphs: Vec<FallingGlyph>,
    player: &Aabb,
) -> (Vec<FallingGlyph>, Vec<FallingGlyph>) {
    glyphs
        .into_iter()
        .partition(|g| player.overlaps(&g.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Glyph;

    fn glyph_at(id: u32, x: f32, y: f32, size: u32) -> FallingGlyph {
        let mut g = FallingGlyph::new(id, Glyph::Hin, x, size, false);
        g.pos.y = y;
        g
    }

    #[test]
    fn test_overlap_hit() {
        let player = Aabb::square(Vec2::new(100.0, 100.0), 40.0);
        let other = Aabb::square(Vec2::new(120.0, 120.0), 20.0);
        assert!(player.overlaps(&other));
        assert!(other.overlaps(&player));
    }

    #[test]
    fn test_edge_touch_is_not_a_hit() {
        let player = Aabb::square(Vec2::new(100.0, 100.0), 40.0);
        // Right edge of glyph touches player's left edge
        let left = Aabb::square(Vec2::new(80.0, 100.0), 20.0);
        assert!(!player.overlaps(&left));
        // Bottom edge of glyph touches player's top edge
        let above = Aabb::square(Vec2::new(100.0, 80.0), 20.0);
        assert!(!player.overlaps(&above));
        // Glyph starts exactly at player's right edge
        let right = Aabb::square(Vec2::new(140.0, 100.0), 20.0);
        assert!(!player.overlaps(&right));
    }

    #[test]
    fn test_partition_preserves_order_and_identity() {
        let player = Aabb::square(Vec2::new(0.0, 560.0), 40.0);
        // Two identical glyphs in the catch zone plus one far away
        let glyphs = vec![
            glyph_at(1, 0.0, 550.0, 20),
            glyph_at(2, 300.0, 100.0, 20),
            glyph_at(3, 0.0, 550.0, 20),
        ];
        let (caught, remaining) = partition_catches(glyphs, &player);
        assert_eq!(caught.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }
}
