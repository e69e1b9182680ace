//! songbook-web library - record catalog web frontend
//!
//! Serves the HTML pages for browsing, adding, editing, deleting and
//! searching song records, backed by the SQLite store.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;

/// Links rendered into the navigation bar of every page
#[derive(Debug, Clone)]
pub struct NavLinks {
    pub home: &'static str,
    pub add: &'static str,
    pub search: &'static str,
}

impl Default for NavLinks {
    fn default() -> Self {
        Self {
            home: "/",
            add: "/records/new",
            search: "/search",
        }
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Navigation targets, fixed at construction time
    pub nav: NavLinks,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            nav: NavLinks::default(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::home_page))
        .route("/records/new", get(api::new_record_page).post(api::create_record))
        .route("/records/:id", get(api::record_page))
        .route("/records/:id/edit", get(api::edit_record_page).post(api::update_record))
        .route("/records/:id/delete", get(api::delete_record_page).post(api::delete_record))
        .route("/search", get(api::search_page))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
