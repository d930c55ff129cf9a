//! Custom emoji management.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{CustomEmoji, NewCustomEmoji};
use crate::domain::repositories::EmojiRepository;
use crate::error::AppError;

/// Service for user-defined emojis offered in the event form.
pub struct EmojiService<R: EmojiRepository> {
    repository: Arc<R>,
}

impl<R: EmojiRepository> EmojiService<R> {
    /// Creates a new emoji service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a custom emoji under a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or symbol is empty after
    /// trimming, [`AppError::Conflict`] if the name is taken.
    pub async fn create_emoji(&self, name: &str, symbol: &str) -> Result<CustomEmoji, AppError> {
        let name = name.trim();
        let symbol = symbol.trim();

        if name.is_empty() {
            return Err(AppError::bad_request(
                "Emoji name is required",
                json!({ "field": "name" }),
            ));
        }

        if symbol.is_empty() {
            return Err(AppError::bad_request(
                "Emoji symbol is required",
                json!({ "field": "symbol" }),
            ));
        }

        self.repository
            .create(NewCustomEmoji {
                name: name.to_string(),
                symbol: symbol.to_string(),
            })
            .await
    }

    /// Lists all custom emojis, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_emojis(&self) -> Result<Vec<CustomEmoji>, AppError> {
        self.repository.list().await
    }

    /// Deletes a custom emoji by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no emoji has that id.
    pub async fn delete_emoji(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Custom emoji not found",
                json!({ "id": id }),
            ))
        }
    }
}
