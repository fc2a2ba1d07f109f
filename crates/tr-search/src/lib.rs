//! `tr-search`: genetic search over shift-choice sequences.
//!
//! An individual is a bit sequence handed to the guided assignment: each
//! newly hired driver consumes one bit (`0` standard, `1` rotating).  The
//! search looks for the sequence that covers the most routes.
//!
//! # Generation loop
//!
//! ```text
//! population := search.population_size random individuals,
//!               lengths in [2 × fleet, 6 × fleet]
//! for generation in 0..search.generations:
//!   ① Evaluate - fitness of every individual (parallel with `parallel`).
//!   ② Record   - GenerationStats; best-ever / final-generation tracking.
//!   ③ Breed    - 2 × (n / 2) distinct tournament winners, shuffled and
//!                crossed over in pairs; unselected individuals appended;
//!                everyone mutated; truncated to n.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates fitness on Rayon's thread pool (default).    |
//! | `serde`    | Serde derives on `SearchConfig` and result types.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tr_core::RosterConfig;
//! use tr_search::{NoopObserver, OptimizerBuilder};
//!
//! let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4)).build()?;
//! let outcome = optimizer.run(&mut NoopObserver);
//! let roster = optimizer.guided_roster(&outcome.best);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod observer;
pub mod operators;
pub mod optimizer;

#[cfg(test)]
mod tests;

pub use builder::OptimizerBuilder;
pub use config::{BestTracking, FitnessMode, SearchConfig};
pub use error::{SearchError, SearchResult};
pub use fitness::FitnessEvaluator;
pub use individual::Individual;
pub use observer::{NoopObserver, SearchObserver};
pub use optimizer::{GenerationStats, Optimizer, SearchOutcome};
