//! Holiday retrieval with layered caching.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::Holiday;
use crate::domain::providers::{HolidayProvider, ProviderError};
use crate::domain::repositories::HolidayRepository;
use crate::infrastructure::cache::HolidayCache;

/// Service resolving holidays for a `(country, year)` pair.
///
/// Resolution runs through three tiers, each short-circuiting on success:
///
/// 1. process-memory cache (no staleness check);
/// 2. persisted rows, when their status row is younger than the TTL;
/// 3. the remote provider, with persisted rows of any age as the fallback
///    when the fetch fails.
///
/// The service never fails outward: every error degrades to the next tier
/// and total failure yields an empty list.
pub struct HolidayService<R: HolidayRepository> {
    repository: Arc<R>,
    provider: Arc<dyn HolidayProvider>,
    cache: Arc<dyn HolidayCache>,
    ttl: Duration,
}

impl<R: HolidayRepository> HolidayService<R> {
    /// Creates a new holiday service.
    ///
    /// `ttl` is the staleness window for persisted rows.
    pub fn new(
        repository: Arc<R>,
        provider: Arc<dyn HolidayProvider>,
        cache: Arc<dyn HolidayCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            provider,
            cache,
            ttl,
        }
    }

    /// Returns the holidays for a country and year.
    ///
    /// `force_refresh` skips the memory and persisted tiers and goes straight
    /// to the provider; a failed forced fetch still falls back to persisted
    /// rows. The country code is uppercased so `cn` and `CN` share one cache
    /// entry. Unknown codes are not rejected; they ride the fallback path to
    /// an empty list.
    pub async fn get_holidays(
        &self,
        country: &str,
        year: i32,
        force_refresh: bool,
    ) -> Vec<Holiday> {
        let country = country.to_uppercase();

        if !force_refresh {
            if let Some(holidays) = self.cache.get(&country, year).await {
                debug!(country = %country, year, "holiday memory cache hit");
                return holidays;
            }

            if let Some(holidays) = self.load_fresh(&country, year).await {
                self.cache.set(&country, year, holidays.clone()).await;
                return holidays;
            }
        }

        match self.fetch_and_store(&country, year).await {
            Ok(holidays) => holidays,
            Err(e) => {
                warn!(
                    country = %country,
                    year,
                    error = %e,
                    "holiday fetch failed, falling back to stored rows"
                );

                let fallback = self.load_any(&country, year).await;
                if !fallback.is_empty() {
                    self.cache.set(&country, year, fallback.clone()).await;
                }
                fallback
            }
        }
    }

    /// Forces a refresh and returns how many holidays the pair resolved to.
    ///
    /// Total failure yields 0, never an error.
    pub async fn refresh_holidays(&self, country: &str, year: i32) -> usize {
        self.get_holidays(country, year, true).await.len()
    }

    /// Loads persisted rows when their status row is within the TTL.
    ///
    /// Read errors are logged and treated as a miss. A fresh status with no
    /// rows is also a miss, so an empty provider answer is retried instead of
    /// being served for the whole window.
    async fn load_fresh(&self, country: &str, year: i32) -> Option<Vec<Holiday>> {
        let status = match self.repository.status(country, year).await {
            Ok(status) => status?,
            Err(e) => {
                warn!(country = %country, year, error = %e, "holiday status read failed");
                return None;
            }
        };

        if !status.is_fresh(self.ttl) {
            return None;
        }

        match self.repository.find_for_year(country, year).await {
            Ok(holidays) if !holidays.is_empty() => Some(holidays),
            Ok(_) => None,
            Err(e) => {
                warn!(country = %country, year, error = %e, "holiday row read failed");
                None
            }
        }
    }

    /// Loads persisted rows regardless of staleness. Errors become an empty
    /// list.
    async fn load_any(&self, country: &str, year: i32) -> Vec<Holiday> {
        match self.repository.find_for_year(country, year).await {
            Ok(holidays) => holidays,
            Err(e) => {
                warn!(country = %country, year, error = %e, "holiday fallback read failed");
                Vec::new()
            }
        }
    }

    /// Fetches from the provider, persists the result and fills the memory
    /// cache.
    ///
    /// The status row moves only when both the fetch and the row replacement
    /// succeed, so a fresh status always describes the rows stored next to
    /// it. Store write errors are logged and absorbed; the fetched set is
    /// authoritative and is returned either way.
    async fn fetch_and_store(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<Holiday>, ProviderError> {
        let holidays = self.provider.fetch(country, year).await?;
        info!(
            country = %country,
            year,
            count = holidays.len(),
            "fetched holidays from provider"
        );

        match self
            .repository
            .replace_for_year(country, year, holidays.clone())
            .await
        {
            Ok(()) => {
                if let Err(e) = self.repository.mark_refreshed(country, year, Utc::now()).await {
                    warn!(country = %country, year, error = %e, "holiday status write failed");
                }
            }
            Err(e) => {
                warn!(country = %country, year, error = %e, "holiday row write failed");
            }
        }

        self.cache.set(country, year, holidays.clone()).await;
        Ok(holidays)
    }
}
