//! Error types for songbook-web
//!
//! Page handlers return [`PageError`]; whatever goes wrong, the user
//! gets the rendered failure page with a matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use songbook_common::Error;

use crate::api::ui;

/// Page handler error type
#[derive(Debug, Error)]
pub enum PageError {
    /// Record not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Error propagated from the application core
    #[error(transparent)]
    App(#[from] songbook_common::Error),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::App(Error::MissingField(_)) => StatusCode::BAD_REQUEST,
            PageError::App(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            PageError::App(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        } else {
            tracing::warn!("request rejected: {message}");
        }

        (status, Html(ui::error_page(&message))).into_response()
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
