//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode, Json};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts stored events
/// 2. **Holiday cache**: Reports in-memory entries
/// 3. **Backups**: Verifies the backup directory can be created
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 events" },
///     "holiday_cache": { "status": "ok", "message": "3 entries in memory" },
///     "backups": { "status": "ok", "message": "Directory writable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let cache_check = check_holiday_cache(&state).await;

    let backups_check = check_backups(&state).await;

    let all_healthy =
        db_check.status == "ok" && cache_check.status == "ok" && backups_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            holiday_cache: cache_check,
            backups: backups_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting events.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
        .fetch_one(&*state.db)
        .await
    {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} events", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Reports how many country/year pairs the memory cache holds.
async fn check_holiday_cache(state: &AppState) -> CheckStatus {
    let entries = state.cache.entry_count().await;
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} entries in memory", entries)),
    }
}

/// Checks that the backup directory exists or can be created.
async fn check_backups(state: &AppState) -> CheckStatus {
    match tokio::fs::create_dir_all(&state.backup_dir).await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Directory writable".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Backup directory error: {}", e)),
        },
    }
}
