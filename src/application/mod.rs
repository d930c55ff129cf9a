//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::event_service::EventService`] - Event creation, lookup and search
//! - [`services::holiday_service::HolidayService`] - Layered holiday resolution
//! - [`services::snapshot_service::SnapshotService`] - Export, import and backups
//! - [`services::emoji_service::EmojiService`] - Custom emoji management
//! - [`services::settings_service::SettingsService`] - Country selection

pub mod services;
