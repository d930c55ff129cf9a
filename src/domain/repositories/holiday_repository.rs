//! Repository trait for persisted holiday data and fetch bookkeeping.

use crate::domain::entities::{Holiday, HolidayCacheStatus};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the holiday store.
///
/// The store is the durable tier of the holiday cache: rows survive restarts
/// and carry no expiry of their own. Freshness lives in the separate
/// [`HolidayCacheStatus`] row per `(country, year)` pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteHolidayRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_holiday.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Loads the persisted holidays for one `(country, year)` pair, ordered
    /// by date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_for_year(&self, country: &str, year: i32) -> Result<Vec<Holiday>, AppError>;

    /// Replaces the persisted set for `(country, year)` with `holidays`.
    ///
    /// Runs as a single transaction: deletes the pair's rows, then inserts
    /// the new set with upsert-by-`(country, date)` semantics. A failed call
    /// leaves the previous rows in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_for_year(
        &self,
        country: &str,
        year: i32,
        holidays: Vec<Holiday>,
    ) -> Result<(), AppError>;

    /// Reads the fetch status row for `(country, year)`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(status))` when the pair has been fetched before
    /// - `Ok(None)` when it never has
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn status(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Option<HolidayCacheStatus>, AppError>;

    /// Upserts the status row for `(country, year)` with `fetched_at`.
    ///
    /// Called only after a successful remote fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_refreshed(
        &self,
        country: &str,
        year: i32,
        fetched_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Lists every stored status row, most recently refreshed first.
    ///
    /// Used by the admin CLI overview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn all_statuses(&self) -> Result<Vec<HolidayCacheStatus>, AppError>;
}
