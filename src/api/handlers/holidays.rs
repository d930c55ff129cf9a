//! Handlers for holiday endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::holidays::{HolidayQuery, HolidayResponse, RefreshRequest, RefreshResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the holidays for a country and year.
///
/// # Endpoint
///
/// `GET /api/holidays/{country}/{year}?refresh=true`
///
/// Resolution goes memory cache, then stored rows, then the remote provider;
/// `refresh=true` skips straight to the provider. The endpoint never fails:
/// when everything is unreachable it answers with an empty array, and an
/// unknown country code behaves the same way.
pub async fn holidays_handler(
    State(state): State<AppState>,
    Path((country, year)): Path<(String, i32)>,
    Query(query): Query<HolidayQuery>,
) -> Json<Vec<HolidayResponse>> {
    let refresh = query.refresh.unwrap_or(false);

    let holidays = state
        .holiday_service
        .get_holidays(&country, year, refresh)
        .await;

    Json(holidays.into_iter().map(Into::into).collect())
}

/// Forces a refresh of one country/year pair.
///
/// # Endpoint
///
/// `POST /api/holidays/refresh`
///
/// # Request Body
///
/// ```json
/// { "country": "CN", "year": 2025 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed country code or year. A refresh
/// that cannot reach the provider is not an error; it reports however many
/// holidays the fallback produced, possibly zero.
pub async fn refresh_holidays_handler(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    payload.validate()?;

    let country = payload.country.to_uppercase();
    let count = state
        .holiday_service
        .refresh_holidays(&country, payload.year)
        .await;

    Ok(Json(RefreshResponse {
        success: true,
        count,
        message: format!("Refreshed {} holidays for {} {}", count, country, payload.year),
    }))
}
