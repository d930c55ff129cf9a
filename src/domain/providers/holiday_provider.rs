//! Provider trait for remote public-holiday data.

use crate::domain::entities::Holiday;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching holidays from the remote provider.
///
/// Callers of [`HolidayProvider`] treat every variant the same way (fall back
/// to persisted data); the variants exist so failures log with a cause.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, DNS, TLS).
    #[error("holiday request failed: {0}")]
    Request(String),

    /// The request did not complete inside the configured timeout.
    #[error("holiday request timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("holiday provider returned status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("malformed holiday payload: {0}")]
    Malformed(String),
}

/// Interface to the remote public-holiday source.
///
/// One call fetches the full holiday list for a `(country, year)` pair.
/// Implementations bound the request with a timeout; they never retry, the
/// caller's fallback path covers failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::provider::NagerClient`] - Nager.Date v3 API client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetches all public holidays for `country` in `year`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on timeout, transport failure, non-2xx
    /// status or an undecodable body.
    async fn fetch(&self, country: &str, year: i32) -> Result<Vec<Holiday>, ProviderError>;
}
