//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One checked-out connection per request, owned by a [`ConnectionScope`]
//! - Repositories borrow that connection explicitly
//! - Single-statement writes, auto-committed

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod scope;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::TodoRepo;
pub use schema::{init_schema, reset_schema, seed_samples};
pub use scope::ConnectionScope;
