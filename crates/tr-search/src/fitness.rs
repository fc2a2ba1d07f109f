//! Fitness evaluation against a shared baseline timetable.

use tr_assign::{Assigner, ChoiceSequence};
use tr_core::RosterConfig;
use tr_timetable::Timetable;

use crate::FitnessMode;

/// Scores individuals against one baseline timetable.
///
/// The baseline and its uncovered-route count are computed once and shared
/// read-only by every evaluation, so `evaluate` can run on any thread.
pub struct FitnessEvaluator<'a> {
    baseline:  &'a Timetable,
    config:    &'a RosterConfig,
    mode:      FitnessMode,
    uncovered: usize,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(baseline: &'a Timetable, config: &'a RosterConfig, mode: FitnessMode) -> Self {
        let uncovered = baseline.iter().filter(|(_, r)| !r.is_driven()).count();
        Self { baseline, config, mode, uncovered }
    }

    /// Routes of the baseline without a driver.  The fitness denominator.
    pub fn baseline_uncovered(&self) -> usize {
        self.uncovered
    }

    /// Fitness in `[0, 1]`; 0 when the baseline has nothing to cover.
    pub fn evaluate(&self, bits: &[bool]) -> f64 {
        if self.uncovered == 0 {
            return 0.0;
        }
        let covered = match self.mode {
            FitnessMode::Approximate => self.approximate(bits),
            FitnessMode::Exact       => self.exact(bits),
        };
        covered as f64 / self.uncovered as f64
    }

    /// Walk routes in day-then-time order with a cursor into `bits`.  An
    /// uncovered route under a set bit counts as covered and advances the
    /// cursor; a clear bit never advances it.  Stops once the cursor passes
    /// the end of `bits`.
    fn approximate(&self, bits: &[bool]) -> usize {
        let mut cursor = 0;
        let mut covered = 0;
        for (_, route) in self.baseline.iter() {
            if cursor >= bits.len() {
                break;
            }
            if !route.is_driven() && bits[cursor] {
                covered += 1;
                cursor += 1;
            }
        }
        covered
    }

    /// Routes newly driven by a guided assignment on a private copy.
    fn exact(&self, bits: &[bool]) -> usize {
        let already = self.baseline.route_count() - self.uncovered;
        let roster = Assigner::new(self.config)
            .assign(self.baseline.clone(), &mut ChoiceSequence::new(bits));
        roster.covered_count().saturating_sub(already)
    }
}
