//! Outbound provider trait definitions for the domain layer.
//!
//! Mirrors the repository pattern for data that lives outside the process:
//! traits here, concrete clients in `crate::infrastructure::provider`.

pub mod holiday_provider;

pub use holiday_provider::{HolidayProvider, ProviderError};

#[cfg(test)]
pub use holiday_provider::MockHolidayProvider;
