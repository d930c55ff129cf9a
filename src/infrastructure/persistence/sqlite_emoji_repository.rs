//! SQLite implementation of the custom emoji repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{CustomEmoji, NewCustomEmoji};
use crate::domain::repositories::EmojiRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct EmojiRow {
    id: i64,
    name: String,
    symbol: String,
    created_at: DateTime<Utc>,
}

impl From<EmojiRow> for CustomEmoji {
    fn from(row: EmojiRow) -> Self {
        CustomEmoji::new(row.id, row.name, row.symbol, row.created_at)
    }
}

/// SQLite repository for custom emoji storage.
pub struct SqliteEmojiRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEmojiRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmojiRepository for SqliteEmojiRepository {
    async fn create(&self, new_emoji: NewCustomEmoji) -> Result<CustomEmoji, AppError> {
        let row = sqlx::query_as::<_, EmojiRow>(
            r#"
            INSERT INTO custom_emojis (name, symbol, created_at)
            VALUES (?, ?, ?)
            RETURNING id, name, symbol, created_at
            "#,
        )
        .bind(&new_emoji.name)
        .bind(&new_emoji.symbol)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => AppError::conflict(
                "Emoji name already exists",
                json!({ "name": new_emoji.name }),
            ),
            _ => e.into(),
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<CustomEmoji>, AppError> {
        let rows = sqlx::query_as::<_, EmojiRow>(
            "SELECT id, name, symbol, created_at FROM custom_emojis ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CustomEmoji::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<CustomEmoji>, AppError> {
        let row = sqlx::query_as::<_, EmojiRow>(
            "SELECT id, name, symbol, created_at FROM custom_emojis WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CustomEmoji::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM custom_emojis WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
