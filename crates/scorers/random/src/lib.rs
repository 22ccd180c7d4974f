//! Noise scorer: uniform random scores from a seeded generator.
//!
//! Makes the engine play arbitrary (but reproducible, per seed) moves.
//! Useful as a baseline any real scorer should beat, and for stress-testing
//! move generation and reversal through full games.

use cormorant_core::{Color, Evaluator, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


#[derive(Debug, Clone)]
pub struct RandomScorer {
    rng: StdRng,
}

impl RandomScorer {
    pub fn new(seed: u64) -> Self {
        RandomScorer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Evaluator for RandomScorer {
    fn score(&mut self, _pos: &Position, _side: Color) -> f64 {
        self.rng.gen_range(-100.0..100.0)
    }

    fn name(&self) -> &str {
        "random"
    }
}
