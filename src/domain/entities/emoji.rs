//! Custom emoji entity.

use chrono::{DateTime, Utc};

/// A user-added emoji offered in the event form alongside the built-ins.
///
/// Names are unique; creating a second emoji under an existing name is a
/// conflict, not an overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEmoji {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}

impl CustomEmoji {
    /// Creates a new CustomEmoji instance.
    pub fn new(id: i64, name: String, symbol: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            symbol,
            created_at,
        }
    }
}

/// Input data for registering a new emoji.
#[derive(Debug, Clone)]
pub struct NewCustomEmoji {
    pub name: String,
    pub symbol: String,
}
