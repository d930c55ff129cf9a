//! DTOs for event endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Event;

/// Request to add an event to a date.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    pub date: NaiveDate,

    /// Event text, 1 to 500 characters.
    #[validate(length(min = 1, max = 500, message = "Text must be 1 to 500 characters"))]
    pub text: String,

    /// Category id; unknown values fall back to `other`.
    pub category: Option<String>,

    /// Emoji shown next to the event.
    pub emoji: Option<String>,
}

/// One stored event.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub text: String,
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            date: event.date,
            text: event.text,
            category: event.category,
            emoji: event.emoji,
            created_at: event.created_at,
        }
    }
}

/// Acknowledgement for event deletion.
///
/// Always `success: true`; deleting an already-gone event is not an error.
#[derive(Debug, Serialize)]
pub struct DeleteEventResponse {
    pub success: bool,
}
