//! DTOs for export, import and backup endpoints.
//!
//! The snapshot body itself is [`crate::application::services::snapshot_service::Snapshot`];
//! these types wrap it for the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::application::services::snapshot_service::{MergeMode, Snapshot};

/// Request to load a snapshot into the store.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    /// The snapshot document, in the export file format.
    pub import_data: Snapshot,

    /// Whether to replace the store or append to it. Defaults to replace.
    #[serde(default = "default_merge_mode")]
    pub merge_mode: MergeMode,
}

fn default_merge_mode() -> MergeMode {
    MergeMode::Replace
}

/// Result of a completed import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    /// Name of the backup file written before the import touched anything.
    pub backup_file: String,
}

/// Result of an on-demand backup.
#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub success: bool,
    pub backup_file: String,
    pub message: String,
}
