//! Search observer trait for progress reporting and data collection.

use crate::{GenerationStats, SearchOutcome};

/// Callbacks invoked by [`Optimizer::run`][crate::Optimizer::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SearchObserver for ProgressPrinter {
///     fn on_generation_end(&mut self, stats: &GenerationStats) {
///         println!("gen {}: best {:.3}", stats.generation, stats.best);
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called after each generation has been evaluated, before breeding.
    fn on_generation_end(&mut self, _stats: &GenerationStats) {}

    /// Called once after the last generation.
    fn on_search_end(&mut self, _outcome: &SearchOutcome) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
