//! Nager.Date public-holiday API client.
//!
//! One endpoint is used: `GET {base}/PublicHolidays/{year}/{country}`,
//! returning a JSON array of holiday objects.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::Holiday;
use crate::domain::providers::{HolidayProvider, ProviderError};

/// One holiday object as the API returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerHoliday {
    date: NaiveDate,
    #[serde(default)]
    local_name: String,
    name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl NagerHoliday {
    fn into_holiday(self, country: &str, year: i32) -> Holiday {
        // An absent types array means the API predates the field; those
        // entries are all public holidays.
        let is_public = self.types.is_empty() || self.types.iter().any(|t| t == "Public");

        Holiday::new(
            country.to_string(),
            self.date,
            self.local_name,
            self.name,
            is_public,
            year,
        )
    }
}

/// HTTP client for the Nager.Date v3 API.
pub struct NagerClient {
    client: Client,
    base_url: String,
}

impl NagerClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl HolidayProvider for NagerClient {
    async fn fetch(&self, country: &str, year: i32) -> Result<Vec<Holiday>, ProviderError> {
        let url = format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url.trim_end_matches('/'),
            year,
            country
        );
        debug!(url = %url, "fetching holidays");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let entries: Vec<NagerHoliday> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Malformed(e.to_string())
            }
        })?;

        Ok(entries
            .into_iter()
            .map(|entry| entry.into_holiday(country, year))
            .collect())
    }
}
