//! Configuration for the todoctl server and CLI
//!
//! Loaded from `~/.todoctl/config.toml` when present, otherwise defaults.
//! Environment overrides:
//! - `TODOCTL_BIND`: server bind address (e.g. `0.0.0.0:8080`)
//! - `TODOCTL_DATABASE`: path of the SQLite file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default bind address
const DEFAULT_BIND: &str = "127.0.0.1:5001";

/// Default pool size. Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Centralized configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite file; a leading `~/` expands to the home directory
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: TodoConfig::home_dir().join("todo.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl TodoConfig {
    /// Load config from ~/.todoctl/config.toml, then apply env overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.database.path = expand_home(&config.database.path);
        Ok(config)
    }

    /// Render the effective config as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Base directory for todoctl files: ~/.todoctl
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".todoctl")
    }

    /// Get config file path: ~/.todoctl/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(bind) = env::var("TODOCTL_BIND") {
            self.server.bind = bind;
        }
        if let Ok(path) = env::var("TODOCTL_DATABASE") {
            self.database.path = expand_home(Path::new(&path));
        }
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        Err(_) => path.to_path_buf(),
    }
}
