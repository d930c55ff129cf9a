//! DTOs for holiday endpoints.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Holiday;

/// Compiled regex for two-letter country codes.
pub(crate) static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").unwrap());

/// Query parameters for the holiday list endpoint.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct HolidayQuery {
    /// Skip caches and fetch from the provider.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub refresh: Option<bool>,
}

/// One holiday as returned by the API.
#[derive(Debug, Serialize)]
pub struct HolidayResponse {
    pub date: NaiveDate,
    /// Name in the country's own language; empty when the provider had none.
    pub local_name: String,
    /// English name.
    pub name: String,
    pub is_public: bool,
}

impl From<Holiday> for HolidayResponse {
    fn from(holiday: Holiday) -> Self {
        Self {
            date: holiday.date,
            local_name: holiday.local_name,
            name: holiday.name,
            is_public: holiday.is_public,
        }
    }
}

/// Request to force-refresh one country/year pair.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(regex(
        path = "*COUNTRY_CODE_REGEX",
        message = "Country must be a two-letter code"
    ))]
    pub country: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
}

/// Result of a forced refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub count: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_validation() {
        let ok = RefreshRequest {
            country: "CN".to_string(),
            year: 2025,
        };
        assert!(ok.validate().is_ok());

        let bad_country = RefreshRequest {
            country: "CHN".to_string(),
            year: 2025,
        };
        assert!(bad_country.validate().is_err());

        let bad_year = RefreshRequest {
            country: "CN".to_string(),
            year: 1234,
        };
        assert!(bad_year.validate().is_err());
    }

    #[test]
    fn test_refresh_flag_parses_from_string() {
        let query: HolidayQuery = serde_json::from_str(r#"{"refresh": "true"}"#).unwrap();
        assert_eq!(query.refresh, Some(true));

        let query: HolidayQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.refresh, None);
    }
}
