//! Error types for stable-cursor
//!
//! The cursor algebra itself never fails: a finished sequence is `None`,
//! and a malformed query string produces [`DecodeErrors`] next to a usable
//! cursor. The [`Error`] type here covers the outer surfaces (configuration
//! files, URLs, the CLI).

use crate::cursor::DecodeErrors;
use thiserror::Error;

/// The main error type for stable-cursor
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// General configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A config field holds a value outside its domain
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// Malformed YAML, or YAML not matching the config schema
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Malformed JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Cursor Errors
    // ============================================================================
    /// A request or base URL that does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Query parameters that failed to decode, when the caller rejects them
    #[error(transparent)]
    Decode(#[from] DecodeErrors),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Reading a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The named file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else, usually with context attached
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for stable-cursor
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("count", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'count': must be positive"
        );
    }

    #[test]
    fn test_url_error_converts() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid URL:"));
    }

    #[test]
    fn test_yaml_and_io_errors_convert() {
        let yaml_err = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.to_string().starts_with("Failed to parse YAML:"));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
