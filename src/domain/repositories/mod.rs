//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`EventRepository`] - Calendar event CRUD and search
//! - [`HolidayRepository`] - Persisted holiday tier of the holiday cache
//! - [`SettingsRepository`] - Key-value user settings
//! - [`EmojiRepository`] - Custom emoji management
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod emoji_repository;
pub mod event_repository;
pub mod holiday_repository;
pub mod settings_repository;

pub use emoji_repository::EmojiRepository;
pub use event_repository::{EventRepository, MonthCount, SearchFilter};
pub use holiday_repository::HolidayRepository;
pub use settings_repository::SettingsRepository;

#[cfg(test)]
pub use emoji_repository::MockEmojiRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use holiday_repository::MockHolidayRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
