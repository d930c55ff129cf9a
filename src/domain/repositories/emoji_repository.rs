//! Repository trait for custom emoji data access.

use crate::domain::entities::{CustomEmoji, NewCustomEmoji};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing user-added emojis.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEmojiRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/handler_emojis.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmojiRepository: Send + Sync {
    /// Registers a new emoji.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_emoji: NewCustomEmoji) -> Result<CustomEmoji, AppError>;

    /// Lists all emojis, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<CustomEmoji>, AppError>;

    /// Finds an emoji by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<CustomEmoji>, AppError>;

    /// Deletes an emoji by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
