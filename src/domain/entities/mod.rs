//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the calendar service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Event`] - A dated calendar entry
//! - [`Holiday`] - A cached public holiday
//! - [`HolidayCacheStatus`] - Freshness record for one `(country, year)` pair
//! - [`CustomEmoji`] - A user-added emoji for the event form
//! - [`Category`] - One of the eight fixed event categories
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewEvent`, `NewCustomEmoji` - For creating new records
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod category;
pub mod emoji;
pub mod event;
pub mod holiday;

pub use category::{CATEGORIES, Category, DEFAULT_CATEGORY, find_category, normalize_category};
pub use emoji::{CustomEmoji, NewCustomEmoji};
pub use event::{Event, NewEvent};
pub use holiday::{Holiday, HolidayCacheStatus};
