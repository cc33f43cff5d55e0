//! todoctl-server: server-rendered todo list over SQLite
//!
//! - [`db`]: connection pool, schema, per-request connection scope, todo store
//! - [`http`]: axum router, handlers, templates, error responses

pub mod db;
pub mod http;

pub use db::{ConnectionScope, DbError, TodoRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
