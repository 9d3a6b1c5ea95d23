//! Error types shared across the workspace.
//!
//! `thiserror` for typed library errors, `anyhow` at the application
//! boundary in the desktop crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors the core can surface. The interaction state machine itself has no
/// failure modes; these come from the ambient pieces (config files,
/// channels).
#[derive(Error, Debug)]
pub enum CardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Event channel closed: the screen was torn down
    #[error("Channel error: receiver dropped")]
    ChannelClosed,
}

/// Result alias for core operations.
pub type CardResult<T> = Result<T, CardError>;
