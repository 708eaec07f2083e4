//! Error types for confkit-core

use std::path::PathBuf;

/// Result type for confkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors raised while constructing or reading a configuration.
///
/// Registry misuse (duplicate or empty adapter names) is not represented
/// here: it panics at the registration call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown config adapter {name:?} (was it registered?)")]
    UnknownAdapter { name: String },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },

    #[error("Failed to serialize {format} content: {message}")]
    Serialize { format: String, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Cannot convert value {value:?} of key {key} to {target}")]
    Conversion {
        key: String,
        value: String,
        target: &'static str,
    },

    #[error("Section not found: {section}")]
    SectionNotFound { section: String },

    #[error("{format} configuration has no sections")]
    SectionsUnsupported { format: String },

    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid value for key {key:?}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn serialize(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialize {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn conversion(key: impl Into<String>, value: impl Into<String>, target: &'static str) -> Self {
        Self::Conversion {
            key: key.into(),
            value: value.into(),
            target,
        }
    }

    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
