#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tempfile::TempDir;

use dopamine_calendar::config::Config;
use dopamine_calendar::domain::entities::Holiday;
use dopamine_calendar::domain::providers::{HolidayProvider, ProviderError};
use dopamine_calendar::infrastructure::cache::{MemoryCache, NullCache};
use dopamine_calendar::state::AppState;

/// Scripted holiday provider with a call counter.
///
/// Answers every fetch with the configured list (or a failure), regardless of
/// the requested pair.
pub struct StubProvider {
    holidays: Mutex<Vec<Holiday>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            holidays: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond_with(&self, holidays: Vec<Holiday>) {
        *self.holidays.lock().unwrap() = holidays;
        self.failing.store(false, Ordering::SeqCst);
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidayProvider for StubProvider {
    async fn fetch(&self, _country: &str, _year: i32) -> Result<Vec<Holiday>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::Status(503));
        }

        Ok(self.holidays.lock().unwrap().clone())
    }
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        data_dir: data_dir.to_path_buf(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        holiday_api_url: "http://localhost:1".to_string(),
        holiday_ttl_hours: 24,
        holiday_timeout_secs: 1,
        backup_keep: 10,
        default_country: "CN".to_string(),
        db_max_connections: 5,
        db_connect_timeout: 30,
    }
}

/// Builds an [`AppState`] over the test pool with a stub provider and a real
/// memory cache. The returned [`TempDir`] holds the backup directory and must
/// outlive the test.
pub fn create_test_state(pool: SqlitePool) -> (AppState, Arc<StubProvider>, TempDir) {
    let data_dir = TempDir::new().unwrap();
    let provider = Arc::new(StubProvider::new());
    let cache = Arc::new(MemoryCache::new());

    let state = AppState::new(
        Arc::new(pool),
        provider.clone(),
        cache,
        &test_config(data_dir.path()),
    );

    (state, provider, data_dir)
}

/// Like [`create_test_state`] but with the memory tier disabled, so every
/// resolution exercises the persisted rows and the provider.
pub fn create_test_state_no_memory(pool: SqlitePool) -> (AppState, Arc<StubProvider>, TempDir) {
    let data_dir = TempDir::new().unwrap();
    let provider = Arc::new(StubProvider::new());
    let cache = Arc::new(NullCache::new());

    let state = AppState::new(
        Arc::new(pool),
        provider.clone(),
        cache,
        &test_config(data_dir.path()),
    );

    (state, provider, data_dir)
}

pub fn holiday(country: &str, date: &str, local_name: &str, name: &str) -> Holiday {
    let date: NaiveDate = date.parse().unwrap();
    Holiday::new(
        country.to_string(),
        date,
        local_name.to_string(),
        name.to_string(),
        true,
        date.year(),
    )
}

pub async fn insert_event(pool: &SqlitePool, date: &str, text: &str, category: &str) -> i64 {
    let date: NaiveDate = date.parse().unwrap();

    sqlx::query_scalar(
        "INSERT INTO events (date, text, category, emoji, created_at) VALUES (?, ?, ?, NULL, ?) RETURNING id",
    )
    .bind(date)
    .bind(text)
    .bind(category)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_holiday(pool: &SqlitePool, country: &str, date: &str, name: &str) {
    let date: NaiveDate = date.parse().unwrap();

    sqlx::query(
        "INSERT INTO holidays (country, date, local_name, name, is_public, year, updated_at) VALUES (?, ?, ?, ?, TRUE, ?, ?)",
    )
    .bind(country)
    .bind(date)
    .bind(name)
    .bind(name)
    .bind(date.year())
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

/// Writes a fetch-status row `age_hours` old for the pair.
pub async fn mark_fetched(pool: &SqlitePool, country: &str, year: i32, age_hours: i64) {
    sqlx::query(
        r#"
        INSERT INTO holiday_cache_status (country, year, last_updated)
        VALUES (?, ?, ?)
        ON CONFLICT (country, year) DO UPDATE SET last_updated = excluded.last_updated
        "#,
    )
    .bind(country)
    .bind(year)
    .bind(Utc::now() - Duration::hours(age_hours))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_holidays(pool: &SqlitePool, country: &str, year: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM holidays WHERE country = ? AND year = ?")
        .bind(country)
        .bind(year)
        .fetch_one(pool)
        .await
        .unwrap()
}
