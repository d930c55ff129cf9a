//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with the
//! runtime query API; entity mapping goes through private `FromRow` row
//! structs so the domain stays free of database types.
//!
//! # Repositories
//!
//! - [`SqliteEventRepository`] - Event storage, search and snapshots
//! - [`SqliteHolidayRepository`] - Persisted holiday tier and fetch status
//! - [`SqliteSettingsRepository`] - Key-value settings
//! - [`SqliteEmojiRepository`] - Custom emoji storage

pub mod sqlite_emoji_repository;
pub mod sqlite_event_repository;
pub mod sqlite_holiday_repository;
pub mod sqlite_settings_repository;

pub use sqlite_emoji_repository::SqliteEmojiRepository;
pub use sqlite_event_repository::SqliteEventRepository;
pub use sqlite_holiday_repository::SqliteHolidayRepository;
pub use sqlite_settings_repository::SqliteSettingsRepository;
