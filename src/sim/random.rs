//! Random source for spawns and respawns
//!
//! The simulation only ever asks for a unit float or a bounded index, so tests
//! can script exact values instead of reverse-engineering a PRNG stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of randomness consumed by the simulation
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f32;
    /// Uniform integer in [0, bound)
    fn below(&mut self, bound: u32) -> u32;
}

/// PCG32-backed source
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from process entropy (no reproducibility)
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}
