//! The `Optimizer` struct and its generation loop.

use tracing::{debug, info};
use tr_assign::{Assigner, ChoiceSequence, Roster};
use tr_core::{RosterConfig, SearchRng};
use tr_timetable::Timetable;

use crate::operators::next_generation;
use crate::{BestTracking, FitnessEvaluator, Individual, SearchConfig, SearchObserver};

// ── Results ───────────────────────────────────────────────────────────────────

/// Fitness summary of one evaluated generation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation number.
    pub generation: usize,
    pub best:       f64,
    pub mean:       f64,
    pub worst:      f64,
    /// Population index of the first individual with `best` fitness.
    pub best_index: usize,
}

impl GenerationStats {
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn from_fitnesses(generation: usize, fitnesses: &[f64]) -> Self {
        let mut best_index = 0;
        let mut worst = fitnesses[0];
        for (i, &f) in fitnesses.iter().enumerate() {
            if f > fitnesses[best_index] {
                best_index = i;
            }
            worst = worst.min(f);
        }
        Self {
            generation,
            best: fitnesses[best_index],
            mean: fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
            worst,
            best_index,
        }
    }
}

/// What [`Optimizer::run`] returns.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best:    Individual,
    pub fitness: f64,
    /// One entry per evaluated generation, in order.
    pub history: Vec<GenerationStats>,
}

// ── Optimizer ─────────────────────────────────────────────────────────────────

/// Genetic search over shift-choice sequences.
///
/// Each generation:
///
/// 1. **Evaluate** every individual against the baseline timetable
///    (parallel with the `parallel` feature).
/// 2. **Record** generation statistics and the best individual; notify the
///    observer.
/// 3. **Breed** the next population: tournament parents, pairwise
///    crossover, unselected survivors, mutation.
///
/// All random draws happen on the calling thread, so the seed alone
/// determines the outcome.
///
/// Create via [`OptimizerBuilder`][crate::OptimizerBuilder].
pub struct Optimizer {
    pub roster:   RosterConfig,
    pub search:   SearchConfig,
    /// Timetable every individual is evaluated against.
    pub baseline: Timetable,

    pub(crate) rng: SearchRng,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Optimizer {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `search.generations` generations from a fresh random population.
    pub fn run<O: SearchObserver>(&mut self, observer: &mut O) -> SearchOutcome {
        let mut population = self.initial_population();
        let evaluator = FitnessEvaluator::new(&self.baseline, &self.roster, self.search.fitness_mode);
        let generations = self.search.generations;

        let mut history = Vec::with_capacity(generations);
        let mut best_ever: Option<(Individual, f64)> = None;
        let mut final_best: Option<(Individual, f64)> = None;

        for generation in 0..generations {
            let fitnesses = self.evaluate(&evaluator, &population);
            let stats = GenerationStats::from_fitnesses(generation, &fitnesses);
            let champion = &population[stats.best_index];

            if best_ever.as_ref().is_none_or(|(_, f)| stats.best > *f) {
                best_ever = Some((champion.clone(), stats.best));
            }
            final_best = Some((champion.clone(), stats.best));

            debug!(generation, best = stats.best, mean = stats.mean, worst = stats.worst, "generation evaluated");
            observer.on_generation_end(&stats);
            history.push(stats);

            if generation + 1 < generations {
                population = next_generation(population, &fitnesses, self.search.mutation_rate, &mut self.rng);
            }
        }

        let chosen = match self.search.best_tracking {
            BestTracking::BestEver        => best_ever,
            BestTracking::FinalGeneration => final_best,
        };
        let (best, fitness) = chosen.unwrap_or_default();

        info!(fitness, length = best.len(), generations, "search complete");
        let outcome = SearchOutcome { best, fitness, history };
        observer.on_search_end(&outcome);
        outcome
    }

    /// Assign the baseline timetable guided by `individual`'s choices.
    pub fn guided_roster(&self, individual: &Individual) -> Roster {
        Assigner::new(&self.roster).assign(self.baseline.clone(), &mut ChoiceSequence::new(individual.bits()))
    }

    /// Score one individual with the configured fitness mode.
    pub fn fitness(&self, individual: &Individual) -> f64 {
        FitnessEvaluator::new(&self.baseline, &self.roster, self.search.fitness_mode).evaluate(individual.bits())
    }

    // ── Generation helpers ────────────────────────────────────────────────

    /// Individuals with lengths drawn independently from
    /// `[2 × fleet, 6 × fleet]` and uniform bits.
    fn initial_population(&mut self) -> Vec<Individual> {
        let fleet = self.roster.fleet_size as usize;
        (0..self.search.population_size)
            .map(|_| {
                let len = self.rng.gen_range(2 * fleet..=6 * fleet);
                Individual::random(len, &mut self.rng)
            })
            .collect()
    }

    /// Fitness of every individual, in population order.
    fn evaluate(&self, evaluator: &FitnessEvaluator<'_>, population: &[Individual]) -> Vec<f64> {
        #[cfg(not(feature = "parallel"))]
        {
            population.iter().map(|ind| evaluator.evaluate(ind.bits())).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let score = || population.par_iter().map(|ind| evaluator.evaluate(ind.bits())).collect::<Vec<f64>>();
            match &self.pool {
                Some(pool) => pool.install(score),
                None       => score(),
            }
        }
    }
}
