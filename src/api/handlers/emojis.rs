//! Handlers for custom emoji endpoints.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::emojis::{CreateEmojiRequest, DeleteEmojiResponse, EmojiResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all registered custom emojis.
///
/// # Endpoint
///
/// `GET /api/emojis`
pub async fn list_emojis_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmojiResponse>>, AppError> {
    let emojis = state.emoji_service.list_emojis().await?;
    Ok(Json(emojis.into_iter().map(Into::into).collect()))
}

/// Registers a custom emoji.
///
/// # Endpoint
///
/// `POST /api/emojis`
///
/// # Request Body
///
/// ```json
/// { "name": "party", "symbol": "🎉" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an empty name or symbol and 409 Conflict when
/// the name is already taken.
pub async fn create_emoji_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmojiRequest>,
) -> Result<Json<EmojiResponse>, AppError> {
    payload.validate()?;

    let emoji = state
        .emoji_service
        .create_emoji(&payload.name, &payload.symbol)
        .await?;

    Ok(Json(emoji.into()))
}

/// Deletes a custom emoji.
///
/// # Endpoint
///
/// `DELETE /api/emojis/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no emoji has that id.
pub async fn delete_emoji_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteEmojiResponse>, AppError> {
    state.emoji_service.delete_emoji(id).await?;
    Ok(Json(DeleteEmojiResponse { success: true }))
}
