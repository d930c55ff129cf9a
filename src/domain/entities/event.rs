//! Event entity representing a dated calendar entry.

use chrono::{DateTime, NaiveDate, Utc};

/// A calendar event attached to a single date.
///
/// Events carry free text, one of the fixed categories and an optional emoji.
/// The `id` is the database rowid and is what delete requests address.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub date: NaiveDate,
    pub text: String,
    pub category: String,
    pub emoji: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new Event instance.
    pub fn new(
        id: i64,
        date: NaiveDate,
        text: String,
        category: String,
        emoji: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            date,
            text,
            category,
            emoji,
            created_at,
        }
    }
}

/// Input data for creating a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub date: NaiveDate,
    pub text: String,
    pub category: String,
    pub emoji: Option<String>,
    pub created_at: DateTime<Utc>,
}
