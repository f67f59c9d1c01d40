// src/error/types.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// Blank or otherwise unusable lookup key, rejected before any I/O.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote catalog has no entry for this name.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or remote-service failure. Retryable by the caller; the
    /// cache itself never retries.
    #[error("Transient fetch error: {0}")]
    TransientFetch(String),

    /// The remote payload violated the expected schema.
    #[error("Malformed remote response: {0}")]
    MalformedResponse(String),

    /// A stored row's serialized blob could not be decoded.
    #[error("Malformed stored record: {0}")]
    MalformedRecord(String),

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<r2d2::Error> for CacheError {
    fn from(err: r2d2::Error) -> Self {
        CacheError::Pool(err.to_string())
    }
}

impl CacheError {
    /// True for errors the caller may reasonably retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, CacheError::TransientFetch(_))
    }
}

pub type CacheResult<T> = Result<T, CacheError>;
