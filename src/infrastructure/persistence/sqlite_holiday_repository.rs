//! SQLite implementation of the holiday repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Holiday, HolidayCacheStatus};
use crate::domain::repositories::HolidayRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct HolidayRow {
    country: String,
    date: NaiveDate,
    local_name: String,
    name: String,
    is_public: bool,
    year: i64,
}

impl From<HolidayRow> for Holiday {
    fn from(row: HolidayRow) -> Self {
        Holiday::new(
            row.country,
            row.date,
            row.local_name,
            row.name,
            row.is_public,
            row.year as i32,
        )
    }
}

#[derive(sqlx::FromRow)]
struct StatusRow {
    country: String,
    year: i64,
    last_updated: DateTime<Utc>,
}

impl From<StatusRow> for HolidayCacheStatus {
    fn from(row: StatusRow) -> Self {
        HolidayCacheStatus::new(row.country, row.year as i32, row.last_updated)
    }
}

/// SQLite repository for the persisted holiday tier.
pub struct SqliteHolidayRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteHolidayRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HolidayRepository for SqliteHolidayRepository {
    async fn find_for_year(&self, country: &str, year: i32) -> Result<Vec<Holiday>, AppError> {
        let rows = sqlx::query_as::<_, HolidayRow>(
            r#"
            SELECT country, date, local_name, name, is_public, year
            FROM holidays
            WHERE country = ? AND year = ?
            ORDER BY date
            "#,
        )
        .bind(country)
        .bind(year)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Holiday::from).collect())
    }

    async fn replace_for_year(
        &self,
        country: &str,
        year: i32,
        holidays: Vec<Holiday>,
    ) -> Result<(), AppError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM holidays WHERE country = ? AND year = ?")
            .bind(country)
            .bind(year)
            .execute(&mut *tx)
            .await?;

        for holiday in &holidays {
            sqlx::query(
                r#"
                INSERT INTO holidays (country, date, local_name, name, is_public, year, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (country, date) DO UPDATE SET
                    local_name = excluded.local_name,
                    name = excluded.name,
                    is_public = excluded.is_public,
                    year = excluded.year,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(country)
            .bind(holiday.date)
            .bind(&holiday.local_name)
            .bind(&holiday.name)
            .bind(holiday.is_public)
            .bind(year)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn status(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Option<HolidayCacheStatus>, AppError> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT country, year, last_updated FROM holiday_cache_status WHERE country = ? AND year = ?",
        )
        .bind(country)
        .bind(year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(HolidayCacheStatus::from))
    }

    async fn mark_refreshed(
        &self,
        country: &str,
        year: i32,
        fetched_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO holiday_cache_status (country, year, last_updated)
            VALUES (?, ?, ?)
            ON CONFLICT (country, year) DO UPDATE SET last_updated = excluded.last_updated
            "#,
        )
        .bind(country)
        .bind(year)
        .bind(fetched_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn all_statuses(&self) -> Result<Vec<HolidayCacheStatus>, AppError> {
        let rows = sqlx::query_as::<_, StatusRow>(
            "SELECT country, year, last_updated FROM holiday_cache_status ORDER BY last_updated DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(HolidayCacheStatus::from).collect())
    }
}
