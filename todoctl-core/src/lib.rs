//! todoctl-core: domain types shared by the server and the CLI
//!
//! - [`TodoItem`]: the single persisted entity
//! - [`TaskText`]: task description validated at construction
//! - [`TodoConfig`]: `~/.todoctl/config.toml` plus env overrides

pub mod config;
pub mod error;
pub mod todo;
pub mod validation;

pub use config::{expand_home, DatabaseSection, ServerSection, TodoConfig};
pub use error::CoreError;
pub use todo::{TaskText, TodoItem};
pub use validation::ValidationError;
