//! Unit and integration tests for tr-search.

use tr_core::{DayId, DriverId, RosterConfig, SearchRng, SlotId};
use tr_timetable::{Coverage, RouteRef, Timetable, TimetableGenerator};

use crate::operators::{crossover, crossover_at, mutate, next_generation, select_parents, tournament};
use crate::{
    BestTracking, FitnessEvaluator, FitnessMode, GenerationStats, Individual, NoopObserver,
    OptimizerBuilder, SearchConfig, SearchError, SearchObserver, SearchOutcome,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Fleet 4 generates 41 routes per day, 287 per week.
const FLEET4_ROUTES: usize = 287;

fn fleet4() -> (RosterConfig, Timetable) {
    let config = RosterConfig::with_fleet_size(4);
    let timetable = TimetableGenerator::new(&config).unwrap().generate();
    (config, timetable)
}

fn bits(s: &str) -> Vec<bool> {
    s.chars().map(|c| c == '1').collect()
}

fn small_search(seed: u64) -> SearchConfig {
    SearchConfig { generations: 8, seed, num_threads: Some(1), ..Default::default() }
}

fn run(config: SearchConfig) -> SearchOutcome {
    OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
        .search(config)
        .build()
        .unwrap()
        .run(&mut NoopObserver)
}

// ── SearchConfig ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = SearchConfig::default();
        assert_eq!(c.population_size, 5);
        assert_eq!(c.generations, 20);
        assert_eq!(c.mutation_rate, 0.3);
        assert_eq!(c.fitness_mode, FitnessMode::Approximate);
        assert_eq!(c.best_tracking, BestTracking::BestEver);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            SearchConfig { population_size: 2, ..Default::default() },
            SearchConfig { generations: 0, ..Default::default() },
            SearchConfig { mutation_rate: 1.5, ..Default::default() },
            SearchConfig { mutation_rate: f64::NAN, ..Default::default() },
            SearchConfig { num_threads: Some(0), ..Default::default() },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(SearchError::Config(_))), "{c:?}");
        }
    }
}

// ── Individual ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod individual {
    use super::*;

    #[test]
    fn displays_as_bit_string() {
        let mut ind = Individual::new(bits("1010"));
        assert_eq!(ind.to_string(), "1010");
        assert_eq!(ind.ones(), 2);
        ind.flip(1);
        assert_eq!(ind.to_string(), "1110");
    }

    #[test]
    fn random_has_requested_length() {
        let mut rng = SearchRng::new(7);
        assert_eq!(Individual::random(13, &mut rng).len(), 13);
        assert!(Individual::random(0, &mut rng).is_empty());
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod operators {
    use super::*;

    #[test]
    fn strict_maximum_of_three_always_wins() {
        let mut rng = SearchRng::new(1);
        let fitnesses = [0.2, 0.9, 0.1];
        for _ in 0..50 {
            assert_eq!(tournament(&fitnesses, &mut rng), 1);
        }
    }

    #[test]
    fn tie_at_the_top_hands_win_to_third_sample() {
        // When the two fit individuals are sampled first neither is strictly
        // best, so the weakest wins as the third sample.
        let mut rng = SearchRng::new(2);
        let fitnesses = [0.5, 0.5, 0.1];
        let weak_wins = (0..200).filter(|_| tournament(&fitnesses, &mut rng) == 2).count();
        assert!(weak_wins > 0);
        assert!(weak_wins < 200);
    }

    #[test]
    fn crossover_swaps_tails() {
        let a = Individual::new(bits("1111"));
        let b = Individual::new(bits("000"));

        let (c1, c2) = crossover_at(&a, &b, 1);
        assert_eq!(c1.to_string(), "100");
        assert_eq!(c2.to_string(), "0111");

        let (c1, c2) = crossover_at(&a, &b, 0);
        assert_eq!(c1, b);
        assert_eq!(c2, a);
    }

    #[test]
    fn crossover_keeps_parent_lengths() {
        let mut rng = SearchRng::new(3);
        let a = Individual::random(10, &mut rng);
        let b = Individual::random(6, &mut rng);
        for _ in 0..20 {
            let (c1, c2) = crossover(&a, &b, &mut rng);
            let mut lens = [c1.len(), c2.len()];
            lens.sort();
            assert_eq!(lens, [6, 10]);
        }
    }

    #[test]
    fn mutation_flips_at_most_one_bit() {
        let mut rng = SearchRng::new(4);
        let original = Individual::new(bits("00000000"));

        let mut never = original.clone();
        for _ in 0..20 {
            assert!(!mutate(&mut never, 0.0, &mut rng));
        }
        assert_eq!(never, original);

        let mut always = original.clone();
        assert!(mutate(&mut always, 1.0, &mut rng));
        assert_eq!(always.ones(), 1);

        let mut empty = Individual::default();
        assert!(!mutate(&mut empty, 1.0, &mut rng));
    }

    #[test]
    fn parents_are_distinct() {
        let mut rng = SearchRng::new(5);
        let fitnesses = [0.1, 0.4, 0.3, 0.2, 0.5];
        for _ in 0..20 {
            let mut p = select_parents(&fitnesses, 4, &mut rng);
            assert_eq!(p.len(), 4);
            p.sort();
            p.dedup();
            assert_eq!(p.len(), 4);
        }
    }

    #[test]
    fn dominated_parents_filled_by_rank() {
        // With three individuals every tournament samples all of them, so
        // only index 0 can ever win.
        let mut rng = SearchRng::new(6);
        let p = select_parents(&[0.9, 0.8, 0.1], 2, &mut rng);
        assert_eq!(p, vec![0, 1]);
    }

    #[test]
    fn next_generation_keeps_population_size() {
        let mut rng = SearchRng::new(8);
        let population: Vec<Individual> = (0..5).map(|_| Individual::random(12, &mut rng)).collect();
        let fitnesses = [0.1, 0.2, 0.3, 0.4, 0.5];
        let next = next_generation(population, &fitnesses, 0.3, &mut rng);
        assert_eq!(next.len(), 5);
        assert!(next.iter().all(|i| i.len() == 12));
    }

    #[test]
    fn identical_population_is_stable_without_mutation() {
        let mut rng = SearchRng::new(9);
        let ind = Individual::new(bits("1100101"));
        let next = next_generation(vec![ind.clone(); 4], &[0.5; 4], 0.0, &mut rng);
        assert_eq!(next, vec![ind; 4]);
    }
}

// ── Fitness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fitness {
    use super::*;

    #[test]
    fn approximate_counts_leading_ones() {
        let (config, t) = fleet4();
        let eval = FitnessEvaluator::new(&t, &config, FitnessMode::Approximate);
        let n = FLEET4_ROUTES as f64;
        assert_eq!(eval.baseline_uncovered(), FLEET4_ROUTES);

        assert_eq!(eval.evaluate(&bits("11111111")), 8.0 / n);
        assert_eq!(eval.evaluate(&bits("1101")), 2.0 / n);
        assert_eq!(eval.evaluate(&bits("0111")), 0.0);
        assert_eq!(eval.evaluate(&[]), 0.0);
        assert_eq!(eval.evaluate(&vec![true; 400]), 1.0);
    }

    #[test]
    fn approximate_skips_driven_routes() {
        let (config, mut t) = fleet4();
        let first = RouteRef::new(DayId(0), 0);
        t.set_coverage(first, Coverage::Driven { driver: DriverId(0), slot: SlotId(0) });
        let eval = FitnessEvaluator::new(&t, &config, FitnessMode::Approximate);
        assert_eq!(eval.baseline_uncovered(), FLEET4_ROUTES - 1);
        assert_eq!(eval.evaluate(&bits("111")), 3.0 / (FLEET4_ROUTES - 1) as f64);
    }

    #[test]
    fn exact_runs_guided_assignment() {
        let (config, t) = fleet4();
        let eval = FitnessEvaluator::new(&t, &config, FitnessMode::Exact);
        // One rotating driver anchored Monday 06:00 claims 27 routes.
        assert_eq!(eval.evaluate(&bits("1")), 27.0 / FLEET4_ROUTES as f64);
        assert_eq!(eval.evaluate(&[]), 0.0);
    }

    #[test]
    fn empty_timetable_scores_zero() {
        let config = RosterConfig::with_fleet_size(4);
        let t = Timetable::default();
        for mode in [FitnessMode::Approximate, FitnessMode::Exact] {
            let eval = FitnessEvaluator::new(&t, &config, mode);
            assert_eq!(eval.evaluate(&bits("111")), 0.0);
        }
    }

    #[test]
    fn stats_pick_first_maximum() {
        let s = GenerationStats::from_fitnesses(3, &[0.2, 0.6, 0.6, 0.1]);
        assert_eq!(s.generation, 3);
        assert_eq!(s.best_index, 1);
        assert_eq!(s.best, 0.6);
        assert_eq!(s.worst, 0.1);
        assert!((s.mean - 0.375).abs() < 1e-12);
    }
}

// ── Optimizer ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod optimizer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        generations: Vec<usize>,
        ended:       bool,
    }

    impl SearchObserver for Recorder {
        fn on_generation_end(&mut self, stats: &GenerationStats) {
            self.generations.push(stats.generation);
        }
        fn on_search_end(&mut self, _outcome: &SearchOutcome) {
            self.ended = true;
        }
    }

    #[test]
    fn build_rejects_bad_inputs() {
        let small_pop = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .search(SearchConfig { population_size: 2, ..Default::default() })
            .build();
        assert!(matches!(small_pop, Err(SearchError::Config(_))));

        let tiny_fleet = OptimizerBuilder::new(RosterConfig::with_fleet_size(1)).build();
        assert!(matches!(tiny_fleet, Err(SearchError::Roster(_))));

        let short_week = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .timetable(Timetable::from_days(vec![Vec::new(); 3]))
            .build();
        assert!(matches!(short_week, Err(SearchError::DayCountMismatch { expected: 7, got: 3 })));
    }

    #[test]
    fn same_seed_same_outcome() {
        let a = run(small_search(11));
        let b = run(small_search(11));
        assert_eq!(a, b);
    }

    #[test]
    fn thread_count_does_not_change_outcome() {
        let one = run(small_search(12));
        let two = run(SearchConfig { num_threads: Some(2), ..small_search(12) });
        assert_eq!(one, two);
    }

    #[test]
    fn fitness_in_unit_range_and_history_complete() {
        let outcome = run(small_search(13));
        assert!((0.0..=1.0).contains(&outcome.fitness));
        assert_eq!(outcome.history.len(), 8);
        for (g, s) in outcome.history.iter().enumerate() {
            assert_eq!(s.generation, g);
            assert!(s.worst <= s.mean + 1e-12 && s.mean <= s.best + 1e-12);
            assert!(s.best <= outcome.fitness, "best-ever below generation {g}");
        }
        // Lengths start in [2 × 4, 6 × 4] and crossover preserves them.
        assert!((8..=24).contains(&outcome.best.len()));
    }

    #[test]
    fn final_generation_tracking_returns_last_best() {
        let outcome = run(SearchConfig { best_tracking: BestTracking::FinalGeneration, ..small_search(14) });
        let last = outcome.history.last().unwrap();
        assert_eq!(outcome.fitness, last.best);
    }

    #[test]
    fn observer_sees_every_generation() {
        let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .search(small_search(15))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        optimizer.run(&mut rec);
        assert_eq!(rec.generations, (0..8).collect::<Vec<_>>());
        assert!(rec.ended);
    }

    #[test]
    fn outcome_fitness_matches_rescoring() {
        let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .search(small_search(16))
            .build()
            .unwrap();
        let outcome = optimizer.run(&mut NoopObserver);
        assert_eq!(optimizer.fitness(&outcome.best), outcome.fitness);
    }

    #[test]
    fn exact_mode_matches_guided_roster() {
        let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .search(SearchConfig { generations: 3, fitness_mode: FitnessMode::Exact, ..small_search(17) })
            .build()
            .unwrap();
        let outcome = optimizer.run(&mut NoopObserver);
        let roster = optimizer.guided_roster(&outcome.best);
        assert!(roster.is_settled());
        assert!((roster.coverage_ratio() - outcome.fitness).abs() < 1e-12);
    }
}
