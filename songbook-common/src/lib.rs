//! songbook-common - shared library for the Songbook record catalog
//!
//! Provides the pieces shared between the web frontend and tests:
//! - Canonical song record model ([`model`])
//! - Form field normalization ([`form`])
//! - Search criteria and in-memory result filtering ([`search`])
//! - Database initialization ([`db`])
//! - Common error types ([`error`])

pub mod db;
pub mod error;
pub mod form;
pub mod model;
pub mod search;

pub use error::{Error, Result};
