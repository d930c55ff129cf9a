//! Per-install settings, currently just the holiday country.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

const COUNTRY_KEY: &str = "country";

/// Service for the key-value settings store.
pub struct SettingsService<R: SettingsRepository> {
    repository: Arc<R>,
    default_country: String,
}

impl<R: SettingsRepository> SettingsService<R> {
    /// Creates a new settings service with a fallback country code.
    pub fn new(repository: Arc<R>, default_country: String) -> Self {
        Self {
            repository,
            default_country,
        }
    }

    /// The selected holiday country, or the configured default when the
    /// setting was never written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn country(&self) -> Result<String, AppError> {
        Ok(self
            .repository
            .get(COUNTRY_KEY)
            .await?
            .unwrap_or_else(|| self.default_country.clone()))
    }

    /// Stores the holiday country and returns the normalized code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless the code is exactly two
    /// letters. Returns [`AppError::Internal`] on database errors.
    pub async fn set_country(&self, code: &str) -> Result<String, AppError> {
        let code = code.trim().to_uppercase();

        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::bad_request(
                "Country must be a two-letter code",
                json!({ "field": "country", "value": code }),
            ));
        }

        self.repository.set(COUNTRY_KEY, &code).await?;
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSettingsRepository;

    #[tokio::test]
    async fn test_country_falls_back_to_default() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_get().times(1).returning(|_| Ok(None));

        let service = SettingsService::new(Arc::new(repo), "CN".to_string());
        assert_eq!(service.country().await.unwrap(), "CN");
    }

    #[tokio::test]
    async fn test_country_reads_stored_value() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_get()
            .withf(|key| key == "country")
            .times(1)
            .returning(|_| Ok(Some("JP".to_string())));

        let service = SettingsService::new(Arc::new(repo), "CN".to_string());
        assert_eq!(service.country().await.unwrap(), "JP");
    }

    #[tokio::test]
    async fn test_set_country_uppercases() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_set()
            .withf(|key, value| key == "country" && value == "US")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SettingsService::new(Arc::new(repo), "CN".to_string());
        assert_eq!(service.set_country(" us ").await.unwrap(), "US");
    }

    #[tokio::test]
    async fn test_set_country_rejects_bad_codes() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_set().times(0);

        let service = SettingsService::new(Arc::new(repo), "CN".to_string());

        for bad in ["", "C", "CHN", "C1", "中国"] {
            let result = service.set_country(bad).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }
}
