//! Injectable random source for the spawner
//!
//! Production runs use a seeded PCG stream so a round replays exactly from
//! its seed; tests plug in scripted sources.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Random draws the spawner needs
pub trait SpawnRng {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform integer in `lo..=hi`
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform index in `0..len` (`len > 0`)
    fn index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1) as u32;
        self.int_inclusive(0, last) as usize
    }

    /// Bernoulli trial
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

impl SpawnRng for Pcg32 {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.random_range(lo..=hi)
    }
}

/// Seeded production generator
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
