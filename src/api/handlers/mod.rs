//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod emojis;
pub mod events;
pub mod health;
pub mod holidays;
pub mod search;
pub mod settings;
pub mod snapshot;

pub use categories::categories_handler;
pub use emojis::{create_emoji_handler, delete_emoji_handler, list_emojis_handler};
pub use events::{create_event_handler, delete_event_handler, list_events_handler};
pub use health::health_handler;
pub use holidays::{holidays_handler, refresh_holidays_handler};
pub use search::search_handler;
pub use settings::{settings_handler, update_settings_handler};
pub use snapshot::{backup_handler, export_handler, import_handler};
