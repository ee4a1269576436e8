//! Error type shared by configuration loading and page output.

use std::path::PathBuf;

/// Errors raised while preparing or writing the landing page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::SiteConfig`].
    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The rendered page could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
