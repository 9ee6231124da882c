//! High-level error types

use vegehub_core::Endpoint;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single attempt at a request failed
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] vegehub_transport::Error),
}

impl AttemptError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core error: {0}")]
    Core(#[from] vegehub_core::Error),

    #[error("Type error: {0}")]
    Types(#[from] vegehub_types::Error),

    /// The hub could not be reached within the retry budget
    #[error("Connection to hub failed ({endpoint}) after {attempts} attempt(s): {source}")]
    Connection {
        endpoint: Endpoint,
        attempts: u32,
        #[source]
        source: AttemptError,
    },

    /// The hub answered but a required key was absent
    #[error("Response from {endpoint} has no `{field}`")]
    MissingField {
        endpoint: Endpoint,
        field: &'static str,
    },

    #[error("Invalid response from device: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// Hub or network is down (retries exhausted)
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Retries exhausted and the last attempt timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Connection { source, .. } if source.is_timeout())
    }

    /// Hub is reachable but answered with unexpected data
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidResponse(_))
    }
}
