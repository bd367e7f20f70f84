// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Tower heights for new nodes.

use rand::Rng;
use rand_core::RngCore;

/// Draws node levels from a geometric distribution.
///
/// Starting at level 0, the level is incremented while a coin with success
/// probability `probability` comes up heads, capped at `max_level - 1`.
/// So `P(level >= k) = probability^k` for every `k` below the cap.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R> {
    rng: R,
    max_level: usize,
    probability: f64,
}

impl<R> LevelGenerator<R> {
    /// Create a generator. The caller guarantees `max_level >= 1` and
    /// `0 < probability < 1`; [`Config::validate`](crate::Config::validate)
    /// checks both.
    pub fn new(rng: R, max_level: usize, probability: f64) -> LevelGenerator<R> {
        return LevelGenerator {
            rng,
            max_level,
            probability,
        };
    }

    pub fn max_level(&self) -> usize {
        return self.max_level;
    }

    pub fn probability(&self) -> f64 {
        return self.probability;
    }
}

impl<R: RngCore> LevelGenerator<R> {
    /// Draw a level in `0..max_level`.
    pub fn random_level(&mut self) -> usize {
        let top = self.max_level - 1;
        let mut level = 0;
        while level < top && self.rng.gen_bool(self.probability) {
            level += 1;
        }
        return level;
    }
}
