//! CLI administration tool for dopamine-calendar.
//!
//! Provides commands for backups, snapshot export/import, holiday cache
//! maintenance, and database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a timestamped backup
//! cargo run --bin admin -- backup create
//!
//! # List existing backups
//! cargo run --bin admin -- backup list
//!
//! # Export all events to a file
//! cargo run --bin admin -- snapshot export events.json
//!
//! # Import a snapshot, replacing current events
//! cargo run --bin admin -- snapshot import events.json --mode replace
//!
//! # Refresh the holiday cache for a country and year
//! cargo run --bin admin -- holidays refresh CN 2025
//!
//! # Show cached holiday sets and their age
//! cargo run --bin admin -- holidays status
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`DATA_DIR`, `DATABASE_URL`,
//! `HOLIDAY_API_URL`, ...). See the `config` module.
//!
//! # Features
//!
//! - **Backups**: Create and list timestamped JSON backups
//! - **Snapshots**: Export and import the full event set
//! - **Holiday Cache**: Force refreshes and inspect freshness
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs before destructive imports
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use dopamine_calendar::application::services::{HolidayService, SnapshotService};
use dopamine_calendar::application::services::snapshot_service::{MergeMode, Snapshot};
use dopamine_calendar::config::{self, Config};
use dopamine_calendar::domain::providers::HolidayProvider;
use dopamine_calendar::domain::repositories::HolidayRepository;
use dopamine_calendar::infrastructure::cache::{HolidayCache, MemoryCache};
use dopamine_calendar::infrastructure::persistence::{
    SqliteEventRepository, SqliteHolidayRepository,
};
use dopamine_calendar::infrastructure::provider::NagerClient;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing dopamine-calendar.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage event backups
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },

    /// Export and import event snapshots
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// Holiday cache maintenance
    Holidays {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Backup subcommands.
#[derive(Subcommand)]
enum BackupAction {
    /// Create a new timestamped backup
    Create,

    /// List existing backups, newest first
    List,
}

/// Snapshot subcommands.
#[derive(Subcommand)]
enum SnapshotAction {
    /// Export all events to a JSON file
    Export {
        /// Output file path
        file: PathBuf,
    },

    /// Import events from a JSON file
    Import {
        /// Input file path
        file: PathBuf,

        /// How to combine imported events with existing ones
        #[arg(short, long, default_value = "replace")]
        mode: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Holiday cache subcommands.
#[derive(Subcommand)]
enum HolidayAction {
    /// Force a refresh from the remote provider
    Refresh {
        /// Two-letter country code (e.g., "CN", "US")
        country: String,

        /// Calendar year
        year: i32,
    },

    /// Show cached holiday sets and their freshness
    Status,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Backup { action } => handle_backup_action(action, &pool, &config).await?,
        Commands::Snapshot { action } => handle_snapshot_action(action, &pool, &config).await?,
        Commands::Holidays { action } => handle_holiday_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the snapshot service the same way the server does.
fn snapshot_service(pool: &SqlitePool, config: &Config) -> SnapshotService<SqliteEventRepository> {
    let repo = Arc::new(SqliteEventRepository::new(Arc::new(pool.clone())));
    SnapshotService::new(repo, config.backup_dir(), config.backup_keep)
}

/// Dispatches backup commands.
async fn handle_backup_action(action: BackupAction, pool: &SqlitePool, config: &Config) -> Result<()> {
    let service = snapshot_service(pool, config);

    match action {
        BackupAction::Create => {
            println!("{}", "📦 Create Backup".bright_blue().bold());
            println!();

            let file_name = service
                .backup()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create backup: {}", e))?;

            println!("{}", "✅ Backup created successfully!".green().bold());
            println!(
                "  File: {}",
                config.backup_dir().join(&file_name).display().to_string().cyan()
            );
            println!();
        }
        BackupAction::List => {
            println!("{}", "📋 Backups".bright_blue().bold());
            println!();

            let backups = service
                .list_backups()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list backups: {}", e))?;

            if backups.is_empty() {
                println!("{}", "  No backups found".yellow());
                println!();
                println!(
                    "  Create one with: {} admin backup create",
                    "cargo run --bin".bright_cyan()
                );
                return Ok(());
            }

            for backup in &backups {
                println!("  {}", backup.cyan());
            }

            println!();
            println!(
                "  Total: {} (keeping at most {})",
                backups.len().to_string().bright_white().bold(),
                config.backup_keep
            );
            println!();
        }
    }

    Ok(())
}

/// Dispatches snapshot export/import commands.
async fn handle_snapshot_action(
    action: SnapshotAction,
    pool: &SqlitePool,
    config: &Config,
) -> Result<()> {
    let service = snapshot_service(pool, config);

    match action {
        SnapshotAction::Export { file } => {
            println!("{}", "📤 Export Events".bright_blue().bold());
            println!();

            let snapshot = service
                .export()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to export events: {}", e))?;

            let event_count: usize = snapshot.events.values().map(Vec::len).sum();
            let json = serde_json::to_string_pretty(&snapshot)?;
            tokio::fs::write(&file, json)
                .await
                .with_context(|| format!("Failed to write {}", file.display()))?;

            println!("{}", "✅ Export complete!".green().bold());
            println!(
                "  {} events across {} days written to {}",
                event_count.to_string().bright_green().bold(),
                snapshot.events.len().to_string().bright_green().bold(),
                file.display().to_string().cyan()
            );
            println!();
        }
        SnapshotAction::Import { file, mode, yes } => {
            import_snapshot(&service, file, &mode, yes).await?;
        }
    }

    Ok(())
}

/// Imports a snapshot file with a confirmation prompt.
///
/// # Flow
///
/// 1. Parse the snapshot file
/// 2. Show how many events it holds
/// 3. Confirm (unless `--yes` flag); replace mode defaults to No
/// 4. Take an automatic backup, then import
async fn import_snapshot(
    service: &SnapshotService<SqliteEventRepository>,
    file: PathBuf,
    mode: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📥 Import Events".bright_blue().bold());
    println!();

    let merge_mode = match mode {
        "replace" => MergeMode::Replace,
        "merge" => MergeMode::Merge,
        other => anyhow::bail!("Unknown mode '{}', expected 'replace' or 'merge'", other),
    };

    let raw = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).context("Snapshot file is not valid JSON")?;

    let event_count: usize = snapshot.events.values().map(Vec::len).sum();

    println!("  File:   {}", file.display().to_string().cyan());
    println!(
        "  Events: {} across {} days",
        event_count.to_string().bright_white().bold(),
        snapshot.events.len()
    );
    println!("  Mode:   {}", mode.bright_white().bold());
    println!();

    if matches!(merge_mode, MergeMode::Replace) {
        println!(
            "{}",
            "⚠️  Replace mode deletes all current events. A backup is taken first."
                .yellow()
        );
        println!();
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Import this snapshot?")
            .default(!matches!(merge_mode, MergeMode::Replace))
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let outcome = service
        .import(snapshot, merge_mode)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to import snapshot: {}", e))?;

    println!();
    println!("{}", "✅ Import complete!".green().bold());
    println!(
        "  Imported: {}",
        outcome.imported.to_string().bright_green().bold()
    );
    println!("  Backup:   {}", outcome.backup_file.cyan());
    println!();

    Ok(())
}

/// Dispatches holiday cache commands.
async fn handle_holiday_action(
    action: HolidayAction,
    pool: &SqlitePool,
    config: &Config,
) -> Result<()> {
    match action {
        HolidayAction::Refresh { country, year } => {
            println!("{}", "🎌 Refresh Holidays".bright_blue().bold());
            println!();

            let repo = Arc::new(SqliteHolidayRepository::new(Arc::new(pool.clone())));
            let provider: Arc<dyn HolidayProvider> = Arc::new(
                NagerClient::new(&config.holiday_api_url, config.holiday_timeout())
                    .context("Failed to build holiday API client")?,
            );
            let cache: Arc<dyn HolidayCache> = Arc::new(MemoryCache::new());
            let service = HolidayService::new(repo, provider, cache, config.holiday_ttl());

            let count = service.refresh_holidays(&country, year).await;

            if count == 0 {
                println!(
                    "{}",
                    "⚠️  No holidays stored. The provider may be unreachable or the country unknown."
                        .yellow()
                );
            } else {
                println!("{}", "✅ Holiday cache refreshed!".green().bold());
                println!(
                    "  {} holidays stored for {} {}",
                    count.to_string().bright_green().bold(),
                    country.to_uppercase().cyan(),
                    year
                );
            }
            println!();
        }
        HolidayAction::Status => {
            holiday_status(pool).await?;
        }
    }

    Ok(())
}

/// Lists cached holiday sets with row counts and freshness.
///
/// # Output Format
///
/// ```text
/// 🎌 Holiday Cache
///
///   Country  Year   Holidays  Last updated
///   ──────────────────────────────────────────────
///   CN       2025   28        2025-06-15 10:30
/// ```
async fn holiday_status(pool: &SqlitePool) -> Result<()> {
    println!("{}", "🎌 Holiday Cache".bright_blue().bold());
    println!();

    let repo = SqliteHolidayRepository::new(Arc::new(pool.clone()));

    let statuses = repo
        .all_statuses()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read cache status: {}", e))?;

    if statuses.is_empty() {
        println!("{}", "  No cached holiday sets".yellow());
        println!();
        println!(
            "  Fetch one with: {} admin holidays refresh CN 2025",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<6} {:<9} {:<20}",
        "Country".bright_white().bold(),
        "Year".bright_white().bold(),
        "Holidays".bright_white().bold(),
        "Last updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(46).bright_black());

    for status in &statuses {
        let count = repo
            .find_for_year(&status.country, status.year)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read holidays: {}", e))?
            .len();

        println!(
            "  {:<8} {:<6} {:<9} {}",
            status.country.cyan(),
            status.year,
            count.to_string().bright_green(),
            status
                .last_updated
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        statuses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let events_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
                .fetch_one(pool)
                .await?;

            let holidays_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holidays")
                .fetch_one(pool)
                .await?;

            let emojis_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM custom_emojis")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:        {}", version.bright_white());
            println!(
                "  Events:        {}",
                events_count.to_string().bright_green().bold()
            );
            println!(
                "  Holidays:      {}",
                holidays_count.to_string().bright_green().bold()
            );
            println!(
                "  Custom emojis: {}",
                emojis_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
