//! API error types with IntoResponse
//!
//! Missing todo items are not errors (handlers redirect instead). What is
//! left is failures that end the request: a database or template error
//! becomes a generic 500 page, an unparseable id becomes a 404.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the path parameters (404)
    NotFound,

    /// Database error (500, logged)
    Database(DbError),

    /// Template rendering failed (500, logged)
    Template(minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            Self::Template(e) => {
                tracing::error!("Template error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = format!(
            "<!doctype html>\n<title>{status}</title>\n<h1>{message}</h1>\n",
            status = status.as_u16(),
            message = message
        );

        (status, Html(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Template(e)
    }
}
