//! Tests for database initialization
//!
//! Covers automatic creation on first run, reopening an existing
//! database, and the songs schema being usable right away.

use std::path::PathBuf;

use songbook_common::db::{init_database, init_memory_database};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let test_db = format!("/tmp/songbook-test-db-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    // Ensure database doesn't exist
    let _ = std::fs::remove_file(&db_path);

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    // Verify database file was created
    assert!(db_path.exists(), "Database file was not created");

    // Cleanup
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_database_opens_existing() {
    let test_db = format!("/tmp/songbook-test-db-existing-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    // Create database first time
    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());

    // Open database second time (should succeed)
    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());

    drop(pool1);
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_songs_schema_accepts_rows() {
    let pool = init_memory_database().await.expect("in-memory database");

    sqlx::query(
        "INSERT INTO songs (id, title, writers, producers, genres, release_date, duration, links, lyrics)
         VALUES ('00000000-0000-0000-0000-000000000001', 'Test', '[]', '[]', '[]', '2020-01-01', '00:03:00', '[]', '')",
    )
    .execute(&pool)
    .await
    .expect("insert should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let pool = init_memory_database().await.expect("in-memory database");

    // Re-running schema creation against a populated database must not fail
    songbook_common::db::create_songs_table(&pool)
        .await
        .expect("second schema creation should succeed");
}
