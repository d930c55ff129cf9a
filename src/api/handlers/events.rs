//! Handlers for event endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use validator::Validate;

use crate::api::dto::events::{CreateEventRequest, DeleteEventResponse, EventResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds an event to a date.
///
/// # Endpoint
///
/// `POST /api/events`
///
/// # Request Body
///
/// ```json
/// {
///   "date": "2025-06-01",
///   "text": "Dentist appointment",
///   "category": "health",   // optional, defaults to "other"
///   "emoji": "🦷"           // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the text is empty or too long.
pub async fn create_event_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    payload.validate()?;

    let event = state
        .event_service
        .create_event(
            payload.date,
            &payload.text,
            payload.category.as_deref(),
            payload.emoji,
        )
        .await?;

    Ok(Json(event.into()))
}

/// Lists the events on one date.
///
/// # Endpoint
///
/// `GET /api/events/{date}`
///
/// A date with no events yields an empty array, not a 404.
pub async fn list_events_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = state.event_service.events_for_date(date).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// Deletes an event by date and id.
///
/// # Endpoint
///
/// `DELETE /api/events/{date}/{id}`
///
/// Idempotent: deleting an event that is already gone still reports success.
pub async fn delete_event_handler(
    State(state): State<AppState>,
    Path((date, id)): Path<(NaiveDate, i64)>,
) -> Result<Json<DeleteEventResponse>, AppError> {
    state.event_service.delete_event(date, id).await?;
    Ok(Json(DeleteEventResponse { success: true }))
}
