//! Handlers for the settings endpoints.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current settings.
///
/// # Endpoint
///
/// `GET /api/settings`
///
/// Before a country is ever chosen this reports the configured default.
pub async fn settings_handler(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let country = state.settings_service.country().await?;
    Ok(Json(SettingsResponse { country }))
}

/// Changes the holiday country.
///
/// # Endpoint
///
/// `PUT /api/settings`
///
/// # Request Body
///
/// ```json
/// { "country": "JP" }
/// ```
///
/// The code is uppercased before storage and echoed back normalized.
///
/// # Errors
///
/// Returns 400 Bad Request unless the code is exactly two letters.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    payload.validate()?;

    let country = state.settings_service.set_country(&payload.country).await?;
    Ok(Json(SettingsResponse { country }))
}
