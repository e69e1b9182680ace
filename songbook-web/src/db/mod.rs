//! Database access layer for songbook-web
//!
//! Provides the song record store used by the page handlers.

pub mod songs;
