//! Repository implementations for database access
//!
//! Repositories borrow a connection from the request's
//! [`ConnectionScope`](crate::db::ConnectionScope) instead of the pool.

pub mod todos;

pub use todos::TodoRepo;
