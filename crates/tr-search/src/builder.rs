//! Fluent builder for constructing an [`Optimizer`].

use tr_core::{RosterConfig, SearchRng};
use tr_timetable::{Timetable, TimetableGenerator};

use crate::{Optimizer, SearchConfig, SearchError, SearchResult};

/// Fluent builder for [`Optimizer`].
///
/// # Required inputs
///
/// - [`RosterConfig`] - fleet size, hours, peaks, shift rules, …
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                       |
/// |--------------------|-----------------------------------------------|
/// | `.search(c)`       | `SearchConfig::default()`                     |
/// | `.timetable(t)`    | generated from the roster config              |
///
/// # Example
///
/// ```rust,ignore
/// let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
///     .search(SearchConfig { generations: 50, ..Default::default() })
///     .build()?;
/// let outcome = optimizer.run(&mut NoopObserver);
/// ```
pub struct OptimizerBuilder {
    roster:    RosterConfig,
    search:    Option<SearchConfig>,
    timetable: Option<Timetable>,
}

impl OptimizerBuilder {
    pub fn new(roster: RosterConfig) -> Self {
        Self { roster, search: None, timetable: None }
    }

    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = Some(search);
        self
    }

    /// Supply the baseline timetable instead of generating one.
    ///
    /// Must have one day per day of the roster config's week.  Routes that
    /// are already driven count as covered in every evaluation.
    pub fn timetable(mut self, timetable: Timetable) -> Self {
        self.timetable = Some(timetable);
        self
    }

    /// Validate both configs, resolve the baseline timetable, and return a
    /// ready-to-run [`Optimizer`].
    pub fn build(self) -> SearchResult<Optimizer> {
        let search = self.search.unwrap_or_default();
        search.validate()?;

        // ── Baseline timetable ────────────────────────────────────────────
        let baseline = match self.timetable {
            Some(t) => {
                self.roster.validate()?;
                let expected = self.roster.week.len();
                if t.day_count() != expected {
                    return Err(SearchError::DayCountMismatch { expected, got: t.day_count() });
                }
                t
            }
            None => TimetableGenerator::new(&self.roster)?.generate(),
        };

        // ── Fitness thread pool ───────────────────────────────────────────
        #[cfg(feature = "parallel")]
        let pool = match search.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        Ok(Optimizer {
            rng:    SearchRng::new(search.seed),
            roster: self.roster,
            search,
            baseline,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
