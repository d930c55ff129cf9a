//! Holiday cache trait.

use crate::domain::entities::Holiday;
use async_trait::async_trait;

/// Process-memory tier of the holiday cache.
///
/// Holds fully-resolved holiday lists per `(country, year)` pair for the
/// lifetime of the process. Implementations must be thread-safe and must not
/// fail: there is no error channel, a missing entry is simply `None`.
///
/// Entries are written only from successful resolutions, so a hit can be
/// served without a staleness check; durability and freshness live in the
/// persisted tier ([`crate::domain::repositories::HolidayRepository`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - HashMap behind an async RwLock
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait HolidayCache: Send + Sync {
    /// Returns the cached list for the pair, if present.
    async fn get(&self, country: &str, year: i32) -> Option<Vec<Holiday>>;

    /// Stores `holidays` for the pair, replacing any previous entry.
    async fn set(&self, country: &str, year: i32, holidays: Vec<Holiday>);

    /// Number of `(country, year)` entries currently held.
    ///
    /// Used by the health endpoint and the admin overview.
    async fn entry_count(&self) -> usize;
}
