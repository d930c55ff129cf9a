//! API route configuration.

use crate::api::handlers::{
    backup_handler, categories_handler, create_emoji_handler, create_event_handler,
    delete_emoji_handler, delete_event_handler, export_handler, health_handler, holidays_handler,
    import_handler, list_emojis_handler, list_events_handler, refresh_holidays_handler,
    search_handler, settings_handler, update_settings_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /events`                    - Add an event to a date
/// - `GET    /events/{date}`             - List events on a date
/// - `DELETE /events/{date}/{id}`        - Delete an event (idempotent)
/// - `GET    /search`                    - Search event texts
/// - `GET    /categories`                - The fixed category list
/// - `GET    /holidays/{country}/{year}` - Holidays, cached in layers
/// - `POST   /holidays/refresh`          - Force-refresh one country/year
/// - `GET    /export`                    - Download the store as JSON
/// - `POST   /import`                    - Load a snapshot (with pre-backup)
/// - `POST   /backup`                    - Write a rotating backup file
/// - `GET    /emojis`                    - List custom emojis
/// - `POST   /emojis`                    - Register a custom emoji
/// - `DELETE /emojis/{id}`               - Delete a custom emoji
/// - `GET    /settings`                  - Current settings
/// - `PUT    /settings`                  - Change the holiday country
/// - `GET    /health`                    - Component health checks
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event_handler))
        .route("/events/{date}", get(list_events_handler))
        .route("/events/{date}/{id}", delete(delete_event_handler))
        .route("/search", get(search_handler))
        .route("/categories", get(categories_handler))
        .route("/holidays/{country}/{year}", get(holidays_handler))
        .route("/holidays/refresh", post(refresh_holidays_handler))
        .route("/export", get(export_handler))
        .route("/import", post(import_handler))
        .route("/backup", post(backup_handler))
        .route("/emojis", get(list_emojis_handler).post(create_emoji_handler))
        .route("/emojis/{id}", delete(delete_emoji_handler))
        .route(
            "/settings",
            get(settings_handler).put(update_settings_handler),
        )
        .route("/health", get(health_handler))
}
