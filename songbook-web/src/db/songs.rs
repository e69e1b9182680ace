//! Song record store
//!
//! One row per record; the list-valued fields travel as JSON arrays in
//! TEXT columns. Identifiers are assigned here, at insert time, and are
//! opaque to callers. Concurrent writers are left to SQLite, there is
//! no locking above it.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use songbook_common::model::{Song, SongFields};
use songbook_common::search::SearchCriteria;
use songbook_common::{Error, Result};

/// Insert a new record and return its freshly assigned id.
///
/// Fails with [`Error::Persistence`] if the write is not acknowledged
/// by the store.
pub async fn insert(pool: &SqlitePool, fields: &SongFields) -> Result<Uuid> {
    let id = Uuid::new_v4();

    let result = sqlx::query(
        r#"
        INSERT INTO songs (
            id, title, writers, producers, genres,
            release_date, duration, links, lyrics
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(&fields.title)
    .bind(encode_list(&fields.writers)?)
    .bind(encode_list(&fields.producers)?)
    .bind(encode_list(&fields.genres)?)
    .bind(&fields.release_date)
    .bind(&fields.duration)
    .bind(encode_list(&fields.links)?)
    .bind(&fields.lyrics)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::Persistence(format!(
            "insert of record '{}' was not acknowledged",
            fields.title
        )));
    }

    Ok(id)
}

/// Look up a record by its identifier string.
///
/// A malformed id is treated the same as an unknown one: the record is
/// simply absent, not an error.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Song>> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    let row = sqlx::query(
        r#"
        SELECT id, title, writers, producers, genres,
               release_date, duration, links, lyrics
        FROM songs
        WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(song_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Fetch records for a search, pushing a non-empty title criterion down
/// as an exact match. The writer and year criteria are evaluated by the
/// caller over the returned records. No ordering is imposed; rows come
/// back in store order.
pub async fn find_all(pool: &SqlitePool, criteria: &SearchCriteria) -> Result<Vec<Song>> {
    let rows = match criteria.title() {
        Some(title) => {
            sqlx::query(
                r#"
                SELECT id, title, writers, producers, genres,
                       release_date, duration, links, lyrics
                FROM songs
                WHERE title = ?
                "#,
            )
            .bind(title)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(
                r#"
                SELECT id, title, writers, producers, genres,
                       release_date, duration, links, lyrics
                FROM songs
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    rows.iter().map(song_from_row).collect()
}

/// Replace every field of an existing record. The id itself never
/// changes. Updating an id that does not exist is [`Error::NotFound`],
/// not a silent no-op.
pub async fn update(pool: &SqlitePool, id: Uuid, fields: &SongFields) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE songs SET
            title = ?, writers = ?, producers = ?, genres = ?,
            release_date = ?, duration = ?, links = ?, lyrics = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.title)
    .bind(encode_list(&fields.writers)?)
    .bind(encode_list(&fields.producers)?)
    .bind(encode_list(&fields.genres)?)
    .bind(&fields.release_date)
    .bind(&fields.duration)
    .bind(encode_list(&fields.links)?)
    .bind(&fields.lyrics)
    .bind(id.to_string())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("record {id}")));
    }

    Ok(())
}

/// Delete a record. Deleting an id that is already gone succeeds; the
/// operation only guarantees the record is absent afterwards.
pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(())
}

/// Count records carrying exactly this title. Used for the duplicate
/// warning on record creation.
pub async fn count_by_title(pool: &SqlitePool, title: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs WHERE title = ?")
        .bind(title)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    let id: String = row.get("id");
    let writers: String = row.get("writers");
    let producers: String = row.get("producers");
    let genres: String = row.get("genres");
    let links: String = row.get("links");

    Ok(Song {
        id: Uuid::parse_str(&id)?,
        fields: SongFields {
            title: row.get("title"),
            writers: decode_list(&writers)?,
            producers: decode_list(&producers)?,
            genres: decode_list(&genres)?,
            release_date: row.get("release_date"),
            duration: row.get("duration"),
            links: decode_list(&links)?,
            lyrics: row.get("lyrics"),
        },
    })
}

fn encode_list(values: &[String]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

fn decode_list(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}
