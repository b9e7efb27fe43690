use std::fmt;

use async_trait::async_trait;

use super::types::Movie;

/// Errors that can occur while talking to a movie metadata source.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum TmdbError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the response body. Not retryable.
    Parse(String),
}

impl fmt::Display for TmdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmdbError::Network(msg) => write!(f, "network error: {msg}"),
            TmdbError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            TmdbError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for TmdbError {}

/// A remote source of movie metadata. The event loop depends on this seam
/// rather than on a concrete client, so tests can substitute canned data.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches the globally trending movies for the given week page.
    async fn trending(&self, page: u32) -> Result<Vec<Movie>, TmdbError>;

    /// Fetches movies whose titles match `query`, one remote page at a time.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, TmdbError>;
}
