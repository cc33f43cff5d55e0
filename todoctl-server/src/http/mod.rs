//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered HTML pages (minijinja)
//! - One database connection scope per request
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
pub use templates::Templates;
