//! Handler for the event search endpoint.

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::search::{SearchQuery, SearchResultItem};
use crate::error::AppError;
use crate::state::AppState;

/// Searches event texts.
///
/// # Endpoint
///
/// `GET /api/search?q=dentist&category=health&start_date=2025-01-01&end_date=2025-12-31`
///
/// Only `q` drives the search; without it the result is an empty array.
/// Matching is a case-insensitive substring test, optionally narrowed by
/// category and an inclusive date range. Hits come back newest date first.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResultItem>>, AppError> {
    let term = query.q.unwrap_or_default();
    let category = query.category.filter(|c| !c.is_empty());

    let events = state
        .event_service
        .search(&term, category, query.start_date, query.end_date)
        .await?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}
