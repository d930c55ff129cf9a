//! Holiday entity and per-pair cache status.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// A public holiday for one country on one date.
///
/// The `(country, date)` pair is the storage key: re-fetching a year replaces
/// matching rows in place instead of accumulating duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Holiday {
    pub country: String,
    pub date: NaiveDate,
    /// Holiday name in the country's own language.
    pub local_name: String,
    /// English holiday name.
    pub name: String,
    pub is_public: bool,
    pub year: i32,
}

impl Holiday {
    /// Creates a new Holiday instance.
    pub fn new(
        country: String,
        date: NaiveDate,
        local_name: String,
        name: String,
        is_public: bool,
        year: i32,
    ) -> Self {
        Self {
            country,
            date,
            local_name,
            name,
            is_public,
            year,
        }
    }

    /// The name shown to users: local name when present, English otherwise.
    pub fn display_name(&self) -> &str {
        if self.local_name.is_empty() {
            &self.name
        } else {
            &self.local_name
        }
    }
}

/// Freshness bookkeeping for one `(country, year)` pair.
///
/// `last_updated` moves only when a remote fetch for the pair succeeds, so it
/// records the age of the persisted holiday rows, not of any read.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayCacheStatus {
    pub country: String,
    pub year: i32,
    pub last_updated: DateTime<Utc>,
}

impl HolidayCacheStatus {
    /// Creates a new status record.
    pub fn new(country: String, year: i32, last_updated: DateTime<Utc>) -> Self {
        Self {
            country,
            year,
            last_updated,
        }
    }

    /// Returns true if the last successful fetch is younger than `ttl`.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        Utc::now() - self.last_updated < ttl
    }
}
