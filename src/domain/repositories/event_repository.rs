//! Repository trait for calendar event data access.

use crate::domain::entities::{Event, NewEvent};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Filter criteria for event search queries.
///
/// The text term is mandatory; category and date-range bounds are optional
/// narrowing conditions.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    /// Case-insensitive substring to match against event text.
    pub term: String,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SearchFilter {
    /// Creates a new filter matching `term` anywhere in the event text.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Restricts matches to a single category.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Restricts matches to an inclusive date range.
    pub fn with_date_range(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}

/// Per-month event count for the year overview.
#[derive(Debug, Clone)]
pub struct MonthCount {
    pub month: u32,
    pub count: i64,
}

/// Repository interface for managing calendar events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEventRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_event.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Creates a new event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError>;

    /// Lists events on a single date, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Event>, AppError>;

    /// Lists events within an inclusive date range, ordered by date then id.
    ///
    /// Used by the month grid render.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_between(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<Event>, AppError>;

    /// Searches events by text with optional category and date filters.
    ///
    /// Results are ordered newest date first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, filter: SearchFilter) -> Result<Vec<Event>, AppError>;

    /// Deletes an event by date and id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no event
    /// matched. Callers treat both as success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, date: NaiveDate, id: i64) -> Result<bool, AppError>;

    /// Lists every stored event, ordered by date then id.
    ///
    /// Used by snapshot export.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn all(&self) -> Result<Vec<Event>, AppError>;

    /// Replaces the entire event store with `events` in one transaction.
    ///
    /// Returns the number of inserted rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; on error the
    /// existing store is left untouched.
    async fn replace_all(&self, events: Vec<NewEvent>) -> Result<usize, AppError>;

    /// Appends `events` to the store without touching existing rows.
    ///
    /// Returns the number of inserted rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append_all(&self, events: Vec<NewEvent>) -> Result<usize, AppError>;

    /// Counts all stored events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Counts events per month of `year`, skipping empty months.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_month(&self, year: i32) -> Result<Vec<MonthCount>, AppError>;
}
