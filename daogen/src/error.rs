//! Error types for daogen

use thiserror::Error;

/// Result type alias for daogen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while introspecting a schema or emitting files
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Metadata error: {0}")]
    MetadataError(String),

    #[error("Invalid {kind} name {name:?}: not usable as a Rust identifier")]
    InvalidIdentifier { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<mysql_async::Error> for CodegenError {
    fn from(err: mysql_async::Error) -> Self {
        match err {
            mysql_async::Error::Url(e) => CodegenError::ConnectionError(e.to_string()),
            mysql_async::Error::Io(e) => CodegenError::ConnectionError(e.to_string()),
            mysql_async::Error::Driver(e) => CodegenError::ConnectionError(e.to_string()),
            other => CodegenError::MetadataError(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
