//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::calendar_handler;
use axum::{Router, routing::get};

/// Calendar page routes.
///
/// # Endpoints
///
/// - `GET /` - Calendar pages; `?view=month|year|day` selects the view
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(calendar_handler))
}
