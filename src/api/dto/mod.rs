//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod categories;
pub mod emojis;
pub mod events;
pub mod health;
pub mod holidays;
pub mod search;
pub mod settings;
pub mod snapshot;
