//! Genetic operators: tournament selection, crossover, mutation, and the
//! generation update that combines them.
//!
//! All operators draw from the caller's [`SearchRng`] in a fixed order, so
//! a seed determines every generation.

use tr_core::SearchRng;

use crate::Individual;

/// Tournament draws allowed per individual before parent selection falls
/// back to ranking.
const DRAWS_PER_INDIVIDUAL: usize = 20;

/// Three-way tournament over distinct indices of `fitnesses`.
///
/// The first sample wins if it is strictly fitter than both others, then the
/// second likewise; otherwise the third sample wins.
///
/// # Panics
/// Panics if `fitnesses.len() < 3`.
pub fn tournament(fitnesses: &[f64], rng: &mut SearchRng) -> usize {
    let picks = rng.sample_distinct(fitnesses.len(), 3);
    let (i1, i2, i3) = (picks[0], picks[1], picks[2]);
    let (f1, f2, f3) = (fitnesses[i1], fitnesses[i2], fitnesses[i3]);

    if f1 > f2 && f1 > f3 {
        i1
    } else if f2 > f1 && f2 > f3 {
        i2
    } else {
        i3
    }
}

/// Single-point crossover at `point ∈ [0, min_len − 1]`.
///
/// Returns `(a[..p] ++ b[p..], b[..p] ++ a[p..])`.  If either parent is empty
/// the parents are returned unchanged.
pub fn crossover(a: &Individual, b: &Individual, rng: &mut SearchRng) -> (Individual, Individual) {
    let min_len = a.len().min(b.len());
    if min_len == 0 {
        return (a.clone(), b.clone());
    }
    let point = rng.gen_range(0..min_len);
    crossover_at(a, b, point)
}

pub(crate) fn crossover_at(a: &Individual, b: &Individual, point: usize) -> (Individual, Individual) {
    let (a, b) = (a.bits(), b.bits());
    let c1 = a[..point].iter().chain(&b[point..]).copied().collect::<Vec<_>>();
    let c2 = b[..point].iter().chain(&a[point..]).copied().collect::<Vec<_>>();
    (c1.into(), c2.into())
}

/// With probability `rate`, flip one uniformly chosen bit.  Returns whether a
/// bit was flipped.
pub fn mutate(individual: &mut Individual, rate: f64, rng: &mut SearchRng) -> bool {
    if rng.random::<f64>() >= rate || individual.is_empty() {
        return false;
    }
    let index = rng.gen_range(0..individual.len());
    individual.flip(index);
    true
}

/// Collect `wanted` distinct parent indices by repeated tournaments.
///
/// Individuals strictly dominated by two others can never win, so draws are
/// capped at `DRAWS_PER_INDIVIDUAL × population`; any slots still empty are
/// filled with the fittest unselected individuals (lower index first on
/// ties).
pub fn select_parents(fitnesses: &[f64], wanted: usize, rng: &mut SearchRng) -> Vec<usize> {
    let wanted = wanted.min(fitnesses.len());
    let cap = DRAWS_PER_INDIVIDUAL * fitnesses.len();
    let mut chosen: Vec<usize> = Vec::with_capacity(wanted);

    let mut draws = 0;
    while chosen.len() < wanted && draws < cap {
        let winner = tournament(fitnesses, rng);
        draws += 1;
        if !chosen.contains(&winner) {
            chosen.push(winner);
        }
    }

    if chosen.len() < wanted {
        let mut rest: Vec<usize> = (0..fitnesses.len()).filter(|i| !chosen.contains(i)).collect();
        rest.sort_by(|&a, &b| fitnesses[b].total_cmp(&fitnesses[a]));
        chosen.extend(rest.into_iter().take(wanted - chosen.len()));
    }
    chosen
}

/// Breed the next population from `population` and its `fitnesses`.
///
/// `2 × (n / 2)` distinct parents are selected, shuffled and crossed over in
/// pairs.  The children are followed by every unselected individual; all of
/// them are mutated and the result is truncated to `n`.
pub fn next_generation(
    population:    Vec<Individual>,
    fitnesses:     &[f64],
    mutation_rate: f64,
    rng:           &mut SearchRng,
) -> Vec<Individual> {
    let n = population.len();
    let mut parents = select_parents(fitnesses, 2 * (n / 2), rng);
    rng.shuffle(&mut parents);

    let mut next = Vec::with_capacity(n + 1);
    for pair in parents.chunks_exact(2) {
        let (c1, c2) = crossover(&population[pair[0]], &population[pair[1]], rng);
        next.push(c1);
        next.push(c2);
    }
    next.extend(
        population
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !parents.contains(i))
            .map(|(_, ind)| ind),
    );

    for individual in &mut next {
        mutate(individual, mutation_rate, rng);
    }
    next.truncate(n);
    next
}
