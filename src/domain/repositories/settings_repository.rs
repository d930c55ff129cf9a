//! Repository trait for key-value user settings.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the settings store.
///
/// A single-row-per-key table; the only key the application currently writes
/// is `country`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSettingsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` when the key exists
    /// - `Ok(None)` when it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Upserts `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
