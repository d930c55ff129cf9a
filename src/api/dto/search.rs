//! DTOs for the event search endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Event;

/// Search query parameters.
///
/// Every field is optional; a missing or empty `q` makes the search return
/// nothing instead of everything.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, with = "optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, with = "optional_date")]
    pub end_date: Option<NaiveDate>,
}

/// One search hit: the event plus a human-readable date label.
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub id: i64,
    pub date: NaiveDate,
    /// English-formatted date, e.g. `June 1, 2025`.
    pub date_label: String,
    pub text: String,
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl From<Event> for SearchResultItem {
    fn from(event: Event) -> Self {
        let date_label = event.date.format("%B %-d, %Y").to_string();
        Self {
            id: event.id,
            date: event.date,
            date_label,
            text: event.text,
            category: event.category,
            emoji: event.emoji,
            created_at: event.created_at,
        }
    }
}

/// Custom Serde deserializer for optional `YYYY-MM-DD` query values.
///
/// Browsers submit unset date inputs as empty strings, so empty counts as
/// absent rather than invalid.
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s
                .parse::<NaiveDate>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
