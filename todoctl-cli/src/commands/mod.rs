//! Command implementations for the todoctl CLI

pub mod config;
pub mod init_db;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use init_db::run_init_db;
pub use serve::run_serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use todoctl_core::{expand_home, TodoConfig};

/// Load config, letting an explicit `--db-path` win over file and env.
///
/// A leading `~` in `--db-path` expands like it does in the config file.
pub(crate) fn load_config(db_path: Option<PathBuf>) -> Result<TodoConfig> {
    let mut config = TodoConfig::load().context("Failed to load todoctl config")?;
    if let Some(path) = db_path {
        config.database.path = expand_home(&path);
    }
    Ok(config)
}
