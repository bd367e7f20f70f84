// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Construction-time configuration for ordered sets.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ConfigError;

/// Default number of levels. 16 levels at p = 0.25 covers billions of elements.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Default probability that a node is promoted one level higher.
pub const DEFAULT_PROBABILITY: f64 = 0.25;

/// Largest accepted `max_level`.
pub const MAX_LEVEL_LIMIT: usize = 32;

/// What `add` does when an equal value is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the stored value with the new one.
    #[default]
    Upsert,
    /// Keep the stored value and drop the new one.
    Set,
}

/// What `try_extend` leaves behind when an insertion fails part way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildPolicy {
    /// Undo every change made by the failed extension.
    #[default]
    Rollback,
    /// Keep the values inserted before the failure.
    Partial,
}

/// Configuration for an [`OrderedSet`](crate::OrderedSet).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of levels a node may occupy. Levels are numbered `0..max_level`.
    pub max_level: usize,
    /// Probability of promoting a node to the next level.
    pub probability: f64,
    /// Behavior of `add` on an equal value.
    pub duplicates: DuplicatePolicy,
    /// Behavior of `try_extend` on failure.
    pub build: BuildPolicy,
    /// Seed for level generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Create the default configuration.
    pub fn new() -> Config {
        return Config {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            duplicates: DuplicatePolicy::Upsert,
            build: BuildPolicy::Rollback,
            seed: None,
        };
    }

    pub fn with_max_level(mut self, max_level: usize) -> Config {
        self.max_level = max_level;
        return self;
    }

    pub fn with_probability(mut self, probability: f64) -> Config {
        self.probability = probability;
        return self;
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Config {
        self.duplicates = duplicates;
        return self;
    }

    pub fn with_build(mut self, build: BuildPolicy) -> Config {
        self.build = build;
        return self;
    }

    pub fn with_seed(mut self, seed: u64) -> Config {
        self.seed = Some(seed);
        return self;
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 || self.max_level > MAX_LEVEL_LIMIT {
            return Err(ConfigError::InvalidMaxLevel(self.max_level));
        }
        // Negated so that NaN is rejected too.
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(ConfigError::InvalidProbability(self.probability));
        }
        return Ok(());
    }

    /// Build the random source described by `seed`.
    pub fn rng(&self) -> StdRng {
        return match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }
}

impl Default for Config {
    fn default() -> Self {
        return Self::new();
    }
}
