//! Custom Axum extractors

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use super::server::AppState;
use crate::db::ConnectionScope;

/// Every request gets a fresh, empty scope over the shared pool.
///
/// The scope is dropped when the handler returns, which closes the
/// connection if one was taken.
impl FromRequestParts<Arc<AppState>> for ConnectionScope {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(ConnectionScope::new(state.pool.clone()))
    }
}

/// Extract a todo id from the path.
///
/// Only plain digit runs match, so signs, decimals and anything that does
/// not fit an `i64` are treated as an unknown route (404).
pub struct TodoIdPath(pub i64);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        parse_id(&raw).map(Self).ok_or(ApiError::NotFound)
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
