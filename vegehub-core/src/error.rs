//! Error types for vegehub-core

/// Result type alias for vegehub-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A request needs at least one attempt
    #[error("Invalid retry budget: {0} (at least 1 attempt is required)")]
    InvalidRetryBudget(u32),
}
