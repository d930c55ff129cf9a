//! No-op cache implementation for testing or disabled caching.

use super::service::HolidayCache;
use crate::domain::entities::Holiday;
use async_trait::async_trait;
use tracing::debug;

/// A holiday cache that remembers nothing.
///
/// Every lookup misses, so resolution always exercises the persisted and
/// remote tiers. Used by tests that target those tiers directly.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (memory tier disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HolidayCache for NullCache {
    async fn get(&self, _country: &str, _year: i32) -> Option<Vec<Holiday>> {
        None
    }

    async fn set(&self, _country: &str, _year: i32, _holidays: Vec<Holiday>) {}

    async fn entry_count(&self) -> usize {
        0
    }
}
