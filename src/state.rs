//! Shared application state handed to every handler.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{
    EmojiService, EventService, HolidayService, SettingsService, SnapshotService,
};
use crate::config::Config;
use crate::domain::providers::HolidayProvider;
use crate::infrastructure::cache::HolidayCache;
use crate::infrastructure::persistence::{
    SqliteEmojiRepository, SqliteEventRepository, SqliteHolidayRepository,
    SqliteSettingsRepository,
};

/// Handler-facing bundle of services.
///
/// Repositories are constructed here so handlers never see the pool through
/// anything but the health check. The provider and cache are injected, which
/// is what lets tests swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<EventService<SqliteEventRepository>>,
    pub holiday_service: Arc<HolidayService<SqliteHolidayRepository>>,
    pub snapshot_service: Arc<SnapshotService<SqliteEventRepository>>,
    pub emoji_service: Arc<EmojiService<SqliteEmojiRepository>>,
    pub settings_service: Arc<SettingsService<SqliteSettingsRepository>>,
    pub cache: Arc<dyn HolidayCache>,
    pub db: Arc<SqlitePool>,
    pub backup_dir: PathBuf,
}

impl AppState {
    /// Wires repositories and services onto the pool.
    pub fn new(
        pool: Arc<SqlitePool>,
        provider: Arc<dyn HolidayProvider>,
        cache: Arc<dyn HolidayCache>,
        config: &Config,
    ) -> Self {
        let event_repository = Arc::new(SqliteEventRepository::new(pool.clone()));
        let holiday_repository = Arc::new(SqliteHolidayRepository::new(pool.clone()));
        let settings_repository = Arc::new(SqliteSettingsRepository::new(pool.clone()));
        let emoji_repository = Arc::new(SqliteEmojiRepository::new(pool.clone()));

        let backup_dir = config.backup_dir();

        Self {
            event_service: Arc::new(EventService::new(event_repository.clone())),
            holiday_service: Arc::new(HolidayService::new(
                holiday_repository,
                provider,
                cache.clone(),
                config.holiday_ttl(),
            )),
            snapshot_service: Arc::new(SnapshotService::new(
                event_repository,
                backup_dir.clone(),
                config.backup_keep,
            )),
            emoji_service: Arc::new(EmojiService::new(emoji_repository)),
            settings_service: Arc::new(SettingsService::new(
                settings_repository,
                config.default_country.clone(),
            )),
            cache,
            db: pool,
            backup_dir,
        }
    }
}
