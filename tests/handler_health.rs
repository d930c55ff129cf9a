mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dopamine_calendar::api::handlers::health_handler;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["holiday_cache"]["status"], "ok");
    assert_eq!(json["checks"]["backups"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("holiday_cache").is_some());
    assert!(json["checks"].get("backups").is_some());
}

#[sqlx::test]
async fn test_health_reports_event_count(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "One", "other").await;
    common::insert_event(&pool, "2025-06-02", "Two", "other").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["database"]["message"], "Connected, 2 events");
}
