//! Memory tier of the holiday cache.
//!
//! Provides a [`HolidayCache`] trait with two implementations:
//! - [`MemoryCache`] - Process-lifetime HashMap cache
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::HolidayCache;
