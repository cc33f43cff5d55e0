//! Structured error types for todoctl-core.
//!
//! The CLI wraps these in `anyhow`; library consumers match on variants.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for todoctl-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`crate::TodoConfig`]
    #[error("Failed to parse config file (invalid TOML): {source}")]
    ConfigParse {
        #[from]
        source: toml::de::Error,
    },

    /// Config could not be serialized back to TOML
    #[error("Failed to render config as TOML: {source}")]
    ConfigRender {
        #[from]
        source: toml::ser::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
