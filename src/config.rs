//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional; the defaults give a working local setup.
//!
//! - `DATA_DIR` - Directory for the database file and backups (default: `./data`)
//! - `DATABASE_URL` - SQLite URL; derived from `DATA_DIR` when unset
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HOLIDAY_API_URL` - Holiday provider base URL (default: Nager.Date v3)
//! - `HOLIDAY_TTL_HOURS` - Staleness window for stored holidays (default: 24)
//! - `HOLIDAY_TIMEOUT_SECS` - Provider request timeout (default: 10)
//! - `BACKUP_KEEP` - Rotating backup files to keep (default: 10)
//! - `DEFAULT_COUNTRY` - Country code used before one is chosen (default: `CN`)

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Directory holding the SQLite file and the `backups/` subdirectory.
    pub data_dir: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the public-holiday API.
    pub holiday_api_url: String,
    /// Hours before stored holidays count as stale and get re-fetched.
    pub holiday_ttl_hours: i64,
    /// Timeout in seconds for one holiday provider request.
    pub holiday_timeout_secs: u64,
    /// How many rotating backup files to keep.
    pub backup_keep: usize,
    /// Country code used until the user picks one.
    pub default_country: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// This currently cannot fail (every variable has a default), but the
    /// signature leaves room for required variables later.
    pub fn from_env() -> Result<Self> {
        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));

        let database_url = Self::load_database_url(&data_dir);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let holiday_api_url = env::var("HOLIDAY_API_URL")
            .unwrap_or_else(|_| "https://date.nager.at/api/v3".to_string());

        let holiday_ttl_hours = env::var("HOLIDAY_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let holiday_timeout_secs = env::var("HOLIDAY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let backup_keep = env::var("BACKUP_KEEP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let default_country = env::var("DEFAULT_COUNTRY").unwrap_or_else(|_| "CN".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            data_dir,
            listen_addr,
            log_level,
            log_format,
            holiday_api_url,
            holiday_ttl_hours,
            holiday_timeout_secs,
            backup_keep,
            default_country,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `calendar.db` inside the data directory, created on first open
    fn load_database_url(data_dir: &Path) -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        format!("sqlite://{}/calendar.db?mode=rwc", data_dir.display())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the database URL is not a SQLite URL
    /// - the holiday API URL is not a valid http(s) URL
    /// - a numeric setting is outside its range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        match Url::parse(&self.holiday_api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => anyhow::bail!(
                "HOLIDAY_API_URL must be a valid http(s) URL, got '{}'",
                self.holiday_api_url
            ),
        }

        if self.holiday_ttl_hours < 1 {
            anyhow::bail!(
                "HOLIDAY_TTL_HOURS must be at least 1, got {}",
                self.holiday_ttl_hours
            );
        }

        if self.holiday_timeout_secs == 0 || self.holiday_timeout_secs > 300 {
            anyhow::bail!(
                "HOLIDAY_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.holiday_timeout_secs
            );
        }

        if self.backup_keep == 0 {
            anyhow::bail!("BACKUP_KEEP must be at least 1");
        }

        if self.default_country.len() != 2
            || !self.default_country.chars().all(|c| c.is_ascii_alphabetic())
        {
            anyhow::bail!(
                "DEFAULT_COUNTRY must be a two-letter code, got '{}'",
                self.default_country
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Directory where rotating backups are written.
    pub fn backup_dir(&self) -> PathBuf {
        self.data_dir.join("backups")
    }

    /// The staleness window as a duration.
    pub fn holiday_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.holiday_ttl_hours)
    }

    /// The provider request timeout as a duration.
    pub fn holiday_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.holiday_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Holiday API: {}", self.holiday_api_url);
        tracing::info!("  Holiday TTL: {}h", self.holiday_ttl_hours);
        tracing::info!("  Default country: {}", self.default_country);
        tracing::info!("  Backups kept: {}", self.backup_keep);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
