//! Error types

mod facebook;
mod query;
mod transport;

pub use facebook::*;
pub use query::*;
pub use transport::*;

/// Top-level error returned by search and transport operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The accumulated search state could not be turned into FQL.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The transport failed to run the query or returned an unusable response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if retrying the same query might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            _ => false,
        }
    }
}
