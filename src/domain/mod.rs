//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and domain services independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`providers`] - Outbound data source trait definitions
//! - [`calendar`] - Month-grid and workday date arithmetic
//! - [`palette`] - Mood color heuristic for day cells
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository and provider traits define contracts implemented by the
//!   infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Holiday Resolution Flow
//!
//! 1. HTTP handler or page render asks for a `(country, year)` pair
//! 2. [`crate::application::services::HolidayService`] checks the in-memory cache
//! 3. On a miss it consults the persisted tier via [`repositories::HolidayRepository`]
//! 4. Stale or absent data triggers a bounded remote fetch via
//!    [`providers::HolidayProvider`], with persisted data as the fallback

pub mod calendar;
pub mod entities;
pub mod palette;
pub mod providers;
pub mod repositories;
