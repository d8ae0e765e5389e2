//! Archive client trait and its error type.

use async_trait::async_trait;
use std::time::Duration;

use super::{AdqlQuery, ArchiveRow};

/// Failures talking to the archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive request timed out after {0:?}")]
    Timeout(Duration),

    #[error("archive unreachable: {0}")]
    Unavailable(String),

    #[error("archive rate limit exceeded")]
    RateLimited,

    #[error("archive responded with HTTP {0}")]
    Status(u16),

    #[error("malformed archive response: {0}")]
    Decode(String),

    #[error("archive request failed: {0}")]
    Request(String),
}

/// Executes ADQL queries against the archive.
///
/// Implementations perform exactly one outbound call per invocation and
/// never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::archive::TapArchiveClient`] - HTTP client for TAP sync endpoints
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    /// Runs `query` and returns the raw rows in archive order.
    ///
    /// An empty response body is reported as zero rows, not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Timeout`] when the archive does not answer in time,
    /// [`ArchiveError::Unavailable`] on connection failures,
    /// [`ArchiveError::RateLimited`] on HTTP 429, and
    /// [`ArchiveError::Status`] / [`ArchiveError::Decode`] for other bad responses.
    async fn fetch_rows(&self, query: &AdqlQuery) -> Result<Vec<ArchiveRow>, ArchiveError>;
}
