use thiserror::Error;

/// Errors that abort a search.
///
/// Not finding a solution is NOT an error; it's reported through
/// [`crate::result::SearchResult::found`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Popped from an empty frontier.
    ///
    /// The search driver checks for emptiness before popping, so this never
    /// escapes a search.
    #[error("Tried to pop from an empty frontier")]
    EmptyFrontier,

    /// The heuristic returned a negative estimate while running with
    /// [`crate::config::HeuristicPolicy::Strict`].
    #[error("Heuristic returned a negative value ({value}) for {state}")]
    InvalidHeuristic { value: String, state: String },

    /// A step cost was negative.
    #[error("Cost of taking {action} from {state} is negative ({value})")]
    NegativeCost {
        value: String,
        state: String,
        action: String,
    },

    /// The configured step budget ran out before the search finished.
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
