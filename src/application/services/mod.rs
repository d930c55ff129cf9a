//! Business logic services for the application layer.

pub mod emoji_service;
pub mod event_service;
pub mod holiday_service;
pub mod settings_service;
pub mod snapshot_service;

pub use emoji_service::EmojiService;
pub use event_service::EventService;
pub use holiday_service::HolidayService;
pub use settings_service::SettingsService;
pub use snapshot_service::SnapshotService;
