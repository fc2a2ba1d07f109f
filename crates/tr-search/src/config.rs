//! Search parameters.

use crate::{SearchError, SearchResult};

/// How an individual's fitness is computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessMode {
    /// Count the leading run of set bits that can be matched to uncovered
    /// routes in day-then-time order.  Ignores breaks, days off and bus
    /// contention.
    #[default]
    Approximate,
    /// Run the real guided assignment and use its coverage ratio.
    Exact,
}

/// Which individual the search returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestTracking {
    /// Fittest individual evaluated in any generation.
    #[default]
    BestEver,
    /// Fittest individual of the last evaluated generation.
    FinalGeneration,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Individuals per generation.  At least 3 (tournaments sample three).
    pub population_size: usize,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Probability that an individual gets one bit flipped per generation.
    pub mutation_rate: f64,

    /// Master RNG seed.  Same seed + same roster config = same outcome.
    pub seed: u64,

    /// Fitness worker threads.  `None` = Rayon's global pool.  Ignored
    /// without the `parallel` feature.
    pub num_threads: Option<usize>,

    pub fitness_mode: FitnessMode,

    pub best_tracking: BestTracking,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            generations:     20,
            mutation_rate:   0.3,
            seed:            42,
            num_threads:     None,
            fitness_mode:    FitnessMode::Approximate,
            best_tracking:   BestTracking::BestEver,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> SearchResult<()> {
        if self.population_size < 3 {
            return Err(SearchError::Config(format!(
                "population size must be at least 3, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(SearchError::Config("generations must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SearchError::Config(format!(
                "mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.num_threads == Some(0) {
            return Err(SearchError::Config("num_threads must be positive".into()));
        }
        Ok(())
    }
}
