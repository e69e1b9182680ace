//! Form field normalization
//!
//! Turns the raw field map submitted by the record form into canonical
//! [`SongFields`]. Pure transformation: no I/O, no store access, so the
//! same input always yields the same record.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::SongFields;

/// Normalize a submitted form into canonical song fields.
///
/// Every field of the form must be present in `raw` (empty values are
/// fine); the first absent field aborts with [`Error::MissingField`].
/// The map may carry extra keys, which are ignored.
pub fn normalize(raw: &HashMap<String, String>) -> Result<SongFields> {
    let title = require(raw, "title")?.trim().to_string();
    let writers = split_lines(require(raw, "writers")?);
    let producers = split_lines(require(raw, "producers")?);
    let genres = split_lines(require(raw, "genres")?);
    let release_date = require(raw, "releaseDate")?.to_string();

    let hours = pad_component(require(raw, "songHours")?);
    let minutes = pad_component(require(raw, "songMinutes")?);
    let seconds = pad_component(require(raw, "songSeconds")?);
    let duration = format!("{hours}:{minutes}:{seconds}");

    let links = split_lines(require(raw, "links")?);
    let lyrics = require(raw, "lyrics")?.to_string();

    Ok(SongFields {
        title,
        writers,
        producers,
        genres,
        release_date,
        duration,
        links,
        lyrics,
    })
}

fn require<'a>(raw: &'a HashMap<String, String>, name: &str) -> Result<&'a str> {
    raw.get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

/// Split a textarea value into entries, one per line. Entries are
/// trimmed; lines that are empty after trimming are dropped. Order of
/// the remaining lines is preserved.
fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize one time component: empty becomes "00", otherwise the
/// value is left-padded with zeros to two characters. Longer values
/// pass through unchanged; no range check is applied.
fn pad_component(value: &str) -> String {
    if value.is_empty() {
        "00".to_string()
    } else {
        format!("{value:0>2}")
    }
}
