//! Whole-store snapshots: export, import and rotating file backups.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::entities::{normalize_category, Event, NewEvent};
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

/// One event as it appears inside a snapshot file.
///
/// Field names are camelCase so exports stay loadable across versions, and
/// `created_at` is optional so hand-edited files still import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEvent {
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Event> for SnapshotEvent {
    fn from(event: Event) -> Self {
        Self {
            text: event.text,
            category: event.category,
            emoji: event.emoji,
            created_at: Some(event.created_at),
        }
    }
}

/// A full export of the event store, keyed by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub events: BTreeMap<NaiveDate, Vec<SnapshotEvent>>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// How imported events combine with the existing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Drop every stored event, then load the snapshot.
    Replace,
    /// Keep stored events and append the snapshot's.
    Merge,
}

/// Result of a completed import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub imported: usize,
    pub backup_file: String,
}

/// Service for snapshotting and restoring the event store.
///
/// Backups land in one directory as timestamped JSON files; only the newest
/// N are kept.
pub struct SnapshotService<R: EventRepository> {
    repository: Arc<R>,
    backup_dir: PathBuf,
    backup_keep: usize,
}

impl<R: EventRepository> SnapshotService<R> {
    /// Creates a new snapshot service writing backups under `backup_dir`.
    pub fn new(repository: Arc<R>, backup_dir: PathBuf, backup_keep: usize) -> Self {
        Self {
            repository,
            backup_dir,
            backup_keep,
        }
    }

    /// Builds a snapshot of every stored event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn export(&self) -> Result<Snapshot, AppError> {
        let mut events: BTreeMap<NaiveDate, Vec<SnapshotEvent>> = BTreeMap::new();

        for event in self.repository.all().await? {
            events.entry(event.date).or_default().push(event.into());
        }

        Ok(Snapshot {
            events,
            export_date: Utc::now(),
            version: "1.0".to_string(),
        })
    }

    /// Loads a snapshot into the store, backing up the current data first.
    ///
    /// `Replace` clears the store before loading; `Merge` appends. Imported
    /// categories are normalized the same way event creation normalizes
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the pre-import backup cannot be
    /// written or on database errors. A failed backup aborts the import.
    pub async fn import(
        &self,
        snapshot: Snapshot,
        mode: MergeMode,
    ) -> Result<ImportOutcome, AppError> {
        let backup_file = self.backup().await?;

        let mut incoming = Vec::new();
        for (date, day_events) in snapshot.events {
            for event in day_events {
                incoming.push(NewEvent {
                    date,
                    text: event.text,
                    category: normalize_category(&event.category).to_string(),
                    emoji: event.emoji,
                    created_at: event.created_at.unwrap_or_else(Utc::now),
                });
            }
        }

        let imported = match mode {
            MergeMode::Replace => self.repository.replace_all(incoming).await?,
            MergeMode::Merge => self.repository.append_all(incoming).await?,
        };

        info!(imported, mode = ?mode, backup = %backup_file, "snapshot imported");

        Ok(ImportOutcome {
            imported,
            backup_file,
        })
    }

    /// Writes a timestamped backup file and prunes old ones.
    ///
    /// Returns the file name (not the full path). Pruning keeps the newest
    /// files up to the configured limit; a prune failure is logged but does
    /// not fail the backup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read or the
    /// file cannot be written.
    pub async fn backup(&self) -> Result<String, AppError> {
        let snapshot = self.export().await?;

        let file_name = format!(
            "events_backup_{}.json",
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        );

        fs::create_dir_all(&self.backup_dir)
            .await
            .map_err(|e| storage_error("create backup directory", &e))?;

        let body = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::internal("Backup serialization failed", json!({ "reason": e.to_string() })))?;

        fs::write(self.backup_dir.join(&file_name), body)
            .await
            .map_err(|e| storage_error("write backup file", &e))?;

        info!(file = %file_name, "backup written");

        if let Err(e) = self.prune().await {
            warn!(error = %e, "backup pruning failed");
        }

        Ok(file_name)
    }

    /// Lists backup file names, newest first.
    ///
    /// A missing backup directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the directory cannot be read.
    pub async fn list_backups(&self) -> Result<Vec<String>, AppError> {
        let mut entries = match fs::read_dir(&self.backup_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("read backup directory", &e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error("read backup directory", &e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with("events_backup_") && name.ends_with(".json") {
                names.push(name);
            }
        }

        // The timestamp format is fixed-width, so reverse name order is
        // newest first.
        names.sort();
        names.reverse();
        Ok(names)
    }

    async fn prune(&self) -> Result<(), AppError> {
        let names = self.list_backups().await?;

        for stale in names.iter().skip(self.backup_keep) {
            fs::remove_file(self.backup_dir.join(stale))
                .await
                .map_err(|e| storage_error("remove old backup", &e))?;
            info!(file = %stale, "old backup removed");
        }

        Ok(())
    }
}

fn storage_error(context: &str, e: &std::io::Error) -> AppError {
    AppError::internal(
        "Backup storage error",
        json!({ "context": context, "reason": e.to_string() }),
    )
}
