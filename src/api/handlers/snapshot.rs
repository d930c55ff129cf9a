//! Handlers for export, import and backup endpoints.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::api::dto::snapshot::{BackupResponse, ImportRequest, ImportResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Downloads the whole event store as a JSON attachment.
///
/// # Endpoint
///
/// `GET /api/export`
///
/// The body is the snapshot document; the `Content-Disposition` header names
/// the download `calendar_export_YYYY-MM-DD.json`.
pub async fn export_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.snapshot_service.export().await?;

    let file_name = format!("calendar_export_{}.json", Utc::now().format("%Y-%m-%d"));
    let headers = [(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", file_name),
    )];

    Ok((headers, Json(snapshot)))
}

/// Loads a snapshot into the event store.
///
/// # Endpoint
///
/// `POST /api/import`
///
/// # Request Body
///
/// ```json
/// {
///   "import_data": { "events": { "2025-06-01": [ ... ] }, "exportDate": "...", "version": "1.0" },
///   "merge_mode": "replace"   // or "merge"; defaults to replace
/// }
/// ```
///
/// The current store is backed up before anything is touched; the backup file
/// name comes back in the response.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the pre-import backup cannot be
/// written (the import is then not attempted) or on database errors.
pub async fn import_handler(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let outcome = state
        .snapshot_service
        .import(payload.import_data, payload.merge_mode)
        .await?;

    Ok(Json(ImportResponse {
        success: true,
        message: format!("Imported {} events", outcome.imported),
        backup_file: outcome.backup_file,
    }))
}

/// Writes an on-demand backup file.
///
/// # Endpoint
///
/// `POST /api/backup`
///
/// Backups rotate: only the newest N files are kept.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the file cannot be written.
pub async fn backup_handler(
    State(state): State<AppState>,
) -> Result<Json<BackupResponse>, AppError> {
    let backup_file = state.snapshot_service.backup().await?;

    Ok(Json(BackupResponse {
        success: true,
        backup_file,
        message: "Backup created".to_string(),
    }))
}
