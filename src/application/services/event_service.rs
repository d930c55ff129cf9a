//! Event creation, lookup, search and deletion.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{normalize_category, Event, NewEvent};
use crate::domain::repositories::{EventRepository, SearchFilter};
use crate::error::AppError;

/// Longest accepted event text, in characters after trimming.
const MAX_TEXT_LEN: usize = 500;

/// Service for calendar events.
///
/// Owns the text and category rules: text is trimmed and bounded, unknown
/// categories collapse to the default instead of being rejected.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a new event service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an event on a date.
    ///
    /// The text is trimmed before validation. A missing category becomes the
    /// default; an unrecognised one is normalized rather than refused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the trimmed text is empty or
    /// longer than 500 characters. Returns [`AppError::Internal`] on
    /// database errors.
    pub async fn create_event(
        &self,
        date: NaiveDate,
        text: &str,
        category: Option<&str>,
        emoji: Option<String>,
    ) -> Result<Event, AppError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(AppError::bad_request(
                "Event text is required",
                json!({ "field": "text" }),
            ));
        }

        if text.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::bad_request(
                "Event text is too long",
                json!({ "field": "text", "max_length": MAX_TEXT_LEN }),
            ));
        }

        let new_event = NewEvent {
            date,
            text: text.to_string(),
            category: normalize_category(category.unwrap_or_default()).to_string(),
            emoji,
            created_at: Utc::now(),
        };

        self.repository.create(new_event).await
    }

    /// Lists the events on a single date, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn events_for_date(&self, date: NaiveDate) -> Result<Vec<Event>, AppError> {
        self.repository.find_by_date(date).await
    }

    /// Lists the events within an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn events_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, AppError> {
        self.repository.find_between(start, end).await
    }

    /// Deletes an event by date and id.
    ///
    /// Deletion is idempotent: removing an event that is already gone is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_event(&self, date: NaiveDate, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(date, id).await?;
        if !deleted {
            debug!(date = %date, id, "delete matched no event");
        }
        Ok(())
    }

    /// Searches event texts.
    ///
    /// An empty or whitespace-only term short-circuits to an empty result
    /// without touching the store. Matching is a case-insensitive substring
    /// test; category and date-range filters narrow it further. Results come
    /// back newest date first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search(
        &self,
        term: &str,
        category: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Event>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let filter = SearchFilter {
            term: term.to_string(),
            category,
            start_date,
            end_date,
        };

        self.repository.search(filter).await
    }

    /// Event counts for each month of a year, January first.
    ///
    /// Months without events are present with a zero count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn month_counts(&self, year: i32) -> Result<[i64; 12], AppError> {
        let mut counts = [0i64; 12];

        for entry in self.repository.count_by_month(year).await? {
            if (1..=12).contains(&entry.month) {
                counts[(entry.month - 1) as usize] = entry.count;
            }
        }

        Ok(counts)
    }
}
