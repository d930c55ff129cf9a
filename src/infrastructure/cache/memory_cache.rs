//! In-memory holiday cache implementation.

use super::service::HolidayCache;
use crate::domain::entities::Holiday;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// HashMap-backed holiday cache guarded by an async read/write lock.
///
/// Entries live for the whole process; there is no eviction or TTL because
/// the data set is tiny (a handful of country/year pairs, each a few dozen
/// rows) and freshness is tracked in the persisted tier.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Vec<Holiday>>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn key(country: &str, year: i32) -> String {
        format!("{}_{}", country, year)
    }
}

#[async_trait]
impl HolidayCache for MemoryCache {
    async fn get(&self, country: &str, year: i32) -> Option<Vec<Holiday>> {
        self.entries
            .read()
            .await
            .get(&Self::key(country, year))
            .cloned()
    }

    async fn set(&self, country: &str, year: i32, holidays: Vec<Holiday>) {
        let key = Self::key(country, year);
        debug!(key = %key, count = holidays.len(), "caching holidays in memory");
        self.entries.write().await.insert(key, holidays);
    }

    async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}
