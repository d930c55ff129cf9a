mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use dopamine_calendar::api::handlers::{
    create_event_handler, delete_event_handler, list_events_handler,
};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_create_event_success(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": "Dentist appointment",
            "category": "health"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["date"], "2025-06-01");
    assert_eq!(json["text"], "Dentist appointment");
    assert_eq!(json["category"], "health");
    assert!(json.get("emoji").is_none());
}

#[sqlx::test]
async fn test_create_event_with_emoji(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-12-31",
            "text": "New year party",
            "category": "social",
            "emoji": "🎉"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["emoji"], "🎉");
}

#[sqlx::test]
async fn test_create_event_defaults_category(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": "No category given"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["category"], "other");
}

#[sqlx::test]
async fn test_create_event_normalizes_unknown_category(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": "Napping",
            "category": "sleeping"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["category"], "other");
}

#[sqlx::test]
async fn test_create_event_trims_text(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": "  morning walk  "
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["text"], "morning walk");
}

#[sqlx::test]
async fn test_create_event_empty_text_rejected(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": ""
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[sqlx::test]
async fn test_create_event_whitespace_only_text_rejected(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events", post(create_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // Passes the length check, fails after trimming.
    let response = server
        .post("/api/events")
        .json(&json!({
            "date": "2025-06-01",
            "text": "   "
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[sqlx::test]
async fn test_list_events_empty_date(pool: SqlitePool) {
    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events/{date}", get(list_events_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/events/2025-06-01").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[sqlx::test]
async fn test_list_events_returns_only_that_date(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "First", "work").await;
    common::insert_event(&pool, "2025-06-01", "Second", "life").await;
    common::insert_event(&pool, "2025-06-02", "Elsewhere", "work").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/events/{date}", get(list_events_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/events/2025-06-01").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "First");
    assert_eq!(items[1]["text"], "Second");
}

#[sqlx::test]
async fn test_delete_event_is_idempotent(pool: SqlitePool) {
    let id = common::insert_event(&pool, "2025-06-01", "Doomed", "other").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/events/{date}/{id}", delete(delete_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.delete(&format!("/api/events/2025-06-01/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);

    // Gone, but deleting again still succeeds.
    let response = server.delete(&format!("/api/events/2025-06-01/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test]
async fn test_delete_event_wrong_date_leaves_row(pool: SqlitePool) {
    let id = common::insert_event(&pool, "2025-06-01", "Keep me", "other").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/events/{date}/{id}", delete(delete_event_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.delete(&format!("/api/events/2025-06-02/{id}")).await;
    response.assert_status_ok();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}
