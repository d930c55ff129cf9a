//! DTOs for custom emoji endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::CustomEmoji;

/// Request to register a custom emoji.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmojiRequest {
    /// Unique name the emoji is picked by.
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,

    /// The emoji itself.
    #[validate(length(min = 1, max = 10, message = "Symbol must be 1 to 10 characters"))]
    pub symbol: String,
}

/// One registered custom emoji.
#[derive(Debug, Serialize)]
pub struct EmojiResponse {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}

impl From<CustomEmoji> for EmojiResponse {
    fn from(emoji: CustomEmoji) -> Self {
        Self {
            id: emoji.id,
            name: emoji.name,
            symbol: emoji.symbol,
            created_at: emoji.created_at,
        }
    }
}

/// Acknowledgement for emoji deletion.
#[derive(Debug, Serialize)]
pub struct DeleteEmojiResponse {
    pub success: bool,
}
