mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use dopamine_calendar::api::handlers::search_handler;
use serde_json::json;
use sqlx::SqlitePool;

fn search_app(state: dopamine_calendar::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/search", get(search_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_search_matches_case_insensitive_substring(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "Dentist appointment", "health").await;
    common::insert_event(&pool, "2025-06-02", "Grocery run", "life").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server.get("/api/search").add_query_param("q", "DENTIST").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "Dentist appointment");
    assert_eq!(items[0]["date"], "2025-06-01");
    assert_eq!(items[0]["date_label"], "June 1, 2025");
}

#[sqlx::test]
async fn test_search_without_term_returns_empty(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "Something", "other").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server.get("/api/search").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));

    let response = server.get("/api/search").add_query_param("q", "").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[sqlx::test]
async fn test_search_filters_by_category(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "Standup meeting", "work").await;
    common::insert_event(&pool, "2025-06-02", "Meeting friends", "social").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server
        .get("/api/search")
        .add_query_param("q", "meeting")
        .add_query_param("category", "work")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "work");
}

#[sqlx::test]
async fn test_search_empty_category_matches_all(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "Standup meeting", "work").await;
    common::insert_event(&pool, "2025-06-02", "Meeting friends", "social").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server
        .get("/api/search")
        .add_query_param("q", "meeting")
        .add_query_param("category", "")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_search_date_range_is_inclusive(pool: SqlitePool) {
    common::insert_event(&pool, "2025-05-31", "walk before", "health").await;
    common::insert_event(&pool, "2025-06-01", "walk on start", "health").await;
    common::insert_event(&pool, "2025-06-15", "walk inside", "health").await;
    common::insert_event(&pool, "2025-06-30", "walk on end", "health").await;
    common::insert_event(&pool, "2025-07-01", "walk after", "health").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server
        .get("/api/search")
        .add_query_param("q", "walk")
        .add_query_param("start_date", "2025-06-01")
        .add_query_param("end_date", "2025-06-30")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        let date = item["date"].as_str().unwrap();
        assert!(("2025-06-01"..="2025-06-30").contains(&date));
    }
}

#[sqlx::test]
async fn test_search_orders_newest_date_first(pool: SqlitePool) {
    common::insert_event(&pool, "2025-06-01", "read a book", "study").await;
    common::insert_event(&pool, "2025-06-20", "read the news", "study").await;
    common::insert_event(&pool, "2025-06-10", "read a paper", "study").await;

    let (state, _provider, _data_dir) = common::create_test_state(pool);
    let server = search_app(state);

    let response = server.get("/api/search").add_query_param("q", "read").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-20", "2025-06-10", "2025-06-01"]);
}
