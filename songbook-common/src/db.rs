//! Database initialization
//!
//! Opens (or creates) the SQLite database backing the record catalog
//! and ensures the songs schema exists. Safe to call on every startup.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

use crate::Result;

/// Initialize the database connection pool, creating the database file
/// and schema on first run.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist (a bare filename has
    // an empty parent)
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Wait out short-lived write locks instead of failing immediately
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_songs_table(&pool).await?;

    Ok(pool)
}

/// Create the songs table and its indexes (idempotent).
///
/// List-valued fields (writers, producers, genres, links) are stored as
/// JSON arrays in TEXT columns. Titles are intentionally not UNIQUE:
/// duplicates are tolerated, the web layer only warns about them.
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            writers TEXT NOT NULL,
            producers TEXT NOT NULL,
            genres TEXT NOT NULL,
            release_date TEXT NOT NULL,
            duration TEXT NOT NULL,
            links TEXT NOT NULL,
            lyrics TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Title is the only pushed-down search predicate
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_songs_title ON songs(title)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Open a fresh in-memory database with the schema applied.
///
/// Test support: the pool is capped at one connection, since each new
/// connection to `sqlite::memory:` would see its own empty database.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_songs_table(&pool).await?;
    Ok(pool)
}
