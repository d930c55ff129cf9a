//! # Dopamine Calendar
//!
//! A personal calendar web app with mood colors, holiday overlays and JSON
//! snapshots, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits, and calendar math
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence, holiday cache, and the Nager.Date client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered month, year, and day views
//!
//! ## Features
//!
//! - Events with categories, custom emojis, and full-text search
//! - Day cells colored by activity level
//! - Public holidays resolved through a layered cache (memory, SQLite, remote API)
//! - JSON export and import with automatic timestamped backups
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point the app at a data directory (defaults to ./data)
//! export DATA_DIR="./data"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! The SQLite database and migrations are created automatically on startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        EventService, HolidayService, SnapshotService,
    };
    pub use crate::domain::entities::{Event, Holiday, NewEvent};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
