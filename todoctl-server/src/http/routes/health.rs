//! Health check endpoint

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::ConnectionScope;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
}

/// GET /health
async fn health(mut scope: ConnectionScope) -> (StatusCode, Json<HealthResponse>) {
    let connected = match scope.acquire().await {
        Ok(conn) => sqlx::query("SELECT 1").execute(conn).await.is_ok(),
        Err(e) => {
            tracing::warn!("health check could not acquire connection: {}", e);
            false
        }
    };

    let (status_code, status) = if connected {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: DatabaseHealth { connected },
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_pool;

    #[tokio::test]
    async fn health_returns_ok() {
        let (_dir, pool) = temp_pool(1).await;
        let (status, Json(body)) = health(ConnectionScope::new(pool)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert!(body.database.connected);
    }

    #[tokio::test]
    async fn health_degraded_when_pool_closed() {
        let (_dir, pool) = temp_pool(1).await;
        pool.close().await;

        let (status, Json(body)) = health(ConnectionScope::new(pool)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.database.connected);
    }

    #[tokio::test]
    async fn health_body_is_json() {
        let (_dir, pool) = temp_pool(1).await;
        let (_, Json(body)) = health(ConnectionScope::new(pool)).await;

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["database"]["connected"], true);
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
