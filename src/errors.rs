//! Error type for chatroi's outer surfaces.
//!
//! The estimator, catalog and session never fail; field problems are
//! advisory and live in [`crate::validation`]. This type covers reading
//! configuration, writing reports and serializing output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be used
    #[error("Configuration error in {}: {message}", path.display())]
    Config { message: String, path: PathBuf },

    /// Configuration values rejected by validation
    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether the user can fix this by editing input or configuration.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::Validation(_) | Error::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_mentions_path() {
        let err = Error::config("unreadable", "/tmp/.chatroi.toml");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/.chatroi.toml: unreadable"
        );
        assert!(err.is_user_fixable());
    }

    #[test]
    fn test_io_error_is_not_user_fixable() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(!err.is_user_fixable());
    }
}
