use thiserror::Error;
use tr_core::RosterError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search configuration error: {0}")]
    Config(String),

    #[error("timetable has {got} days but the week calendar has {expected}")]
    DayCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[cfg(feature = "parallel")]
    #[error("failed to build fitness thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SearchResult<T> = Result<T, SearchError>;
