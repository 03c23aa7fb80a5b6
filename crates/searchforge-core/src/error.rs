//! Error types for SearchForge

use thiserror::Error;

/// Main error type for SearchForge operations
#[derive(Debug, Error)]
pub enum SearchForgeError {
    /// Textual input does not describe a valid domain state
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The frontier emptied without reaching a goal state.
    ///
    /// This is a legitimate terminal outcome for unsolvable configurations,
    /// not a crash condition.
    #[error("search space exhausted after {expanded} expansions with no goal found")]
    Exhausted {
        /// Number of nodes expanded before the frontier emptied.
        expanded: u64,
    },

    /// The configured expansion budget ran out before a goal was found
    #[error("node limit of {limit} reached after {expanded} expansions")]
    NodeLimitReached {
        /// The configured limit.
        limit: u64,
        /// Number of nodes expanded when the limit was hit.
        expanded: u64,
    },
}

/// Result type alias for SearchForge operations
pub type Result<T> = std::result::Result<T, SearchForgeError>;
