//! SQLite implementation of the event repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Event, NewEvent};
use crate::domain::repositories::{EventRepository, MonthCount, SearchFilter};
use crate::error::AppError;

/// Row shape shared by every event query.
#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    date: NaiveDate,
    text: String,
    category: String,
    emoji: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event::new(
            row.id,
            row.date,
            row.text,
            row.category,
            row.emoji,
            row.created_at,
        )
    }
}

const SELECT_COLUMNS: &str = "id, date, text, category, emoji, created_at";

/// SQLite repository for event storage and retrieval.
pub struct SqliteEventRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (date, text, category, emoji, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, date, text, category, emoji, created_at
            "#,
        )
        .bind(new_event.date)
        .bind(&new_event.text)
        .bind(&new_event.category)
        .bind(&new_event.emoji)
        .bind(new_event.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM events WHERE date = ? ORDER BY id"
        ))
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM events WHERE date >= ? AND date <= ? ORDER BY date, id"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn search(&self, filter: SearchFilter) -> Result<Vec<Event>, AppError> {
        // instr over lower() gives a wildcard-safe, case-insensitive
        // substring match; NULL filter binds disable their clause.
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM events
            WHERE instr(lower(text), lower(?)) > 0
              AND (? IS NULL OR category = ?)
              AND (? IS NULL OR date >= ?)
              AND (? IS NULL OR date <= ?)
            ORDER BY date DESC, id DESC
            "#
        ))
        .bind(&filter.term)
        .bind(&filter.category)
        .bind(&filter.category)
        .bind(filter.start_date)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.end_date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn delete(&self, date: NaiveDate, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE date = ? AND id = ?")
            .bind(date)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn all(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM events ORDER BY date, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn replace_all(&self, events: Vec<NewEvent>) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM events").execute(&mut *tx).await?;

        let mut inserted = 0;
        for event in &events {
            sqlx::query(
                "INSERT INTO events (date, text, category, emoji, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(event.date)
            .bind(&event.text)
            .bind(&event.category)
            .bind(&event.emoji)
            .bind(event.created_at)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn append_all(&self, events: Vec<NewEvent>) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut inserted = 0;
        for event in &events {
            sqlx::query(
                "INSERT INTO events (date, text, category, emoji, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(event.date)
            .bind(&event.text)
            .bind(&event.category)
            .bind(&event.emoji)
            .bind(event.created_at)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_by_month(&self, year: i32) -> Result<Vec<MonthCount>, AppError> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT CAST(strftime('%m', date) AS INTEGER), COUNT(*)
            FROM events
            WHERE strftime('%Y', date) = ?
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(format!("{:04}", year))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(month, count)| MonthCount {
                month: month as u32,
                count,
            })
            .collect())
    }
}
