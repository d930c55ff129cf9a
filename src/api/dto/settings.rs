//! DTOs for the settings endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::holidays::COUNTRY_CODE_REGEX;

/// The current settings.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Country whose holidays the calendar shows.
    pub country: String,
}

/// Request to change the holiday country.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(regex(
        path = "*COUNTRY_CODE_REGEX",
        message = "Country must be a two-letter code"
    ))]
    pub country: String,
}
