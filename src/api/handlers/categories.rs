//! Handler for the category list endpoint.

use axum::Json;

use crate::api::dto::categories::CategoryResponse;
use crate::domain::entities::CATEGORIES;

/// Lists the fixed event categories.
///
/// # Endpoint
///
/// `GET /api/categories`
///
/// The set is compiled in; there is no way to add categories at runtime.
pub async fn categories_handler() -> Json<Vec<CategoryResponse>> {
    Json(CATEGORIES.iter().map(Into::into).collect())
}
