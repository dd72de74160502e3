//! Error handling module for aurdot
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the library should use these types for consistency.

use thiserror::Error;

/// Main error type for aurdot
#[derive(Error, Debug)]
pub enum AurdotError {
    /// IO errors (file operations, subprocess plumbing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Helper bootstrap errors (tool missing and not installable)
    #[error("Bootstrap error: {0}")]
    Bootstrap(String),

    /// A directive name no plugin claims
    #[error("Cannot handle directive {0}")]
    UnknownDirective(String),

    /// Failure to spawn the install command itself
    #[error("Failed to spawn install command for package '{package}': {source}")]
    Spawn {
        package: String,
        source: std::io::Error,
    },
}

/// Result type alias for aurdot operations
pub type Result<T> = std::result::Result<T, AurdotError>;

// Convenient error constructors
impl AurdotError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a bootstrap error
    pub fn bootstrap(msg: impl Into<String>) -> Self {
        Self::Bootstrap(msg.into())
    }

    /// Create an unknown-directive error
    pub fn unknown_directive(directive: impl Into<String>) -> Self {
        Self::UnknownDirective(directive.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AurdotError::config("directive list is empty");
        assert_eq!(err.to_string(), "Configuration error: directive list is empty");

        let err = AurdotError::bootstrap("pacaur could not be installed on your system");
        assert_eq!(
            err.to_string(),
            "Bootstrap error: pacaur could not be installed on your system"
        );

        let err = AurdotError::unknown_directive("brew");
        assert_eq!(err.to_string(), "Cannot handle directive brew");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AurdotError = io_err.into();
        assert!(matches!(err, AurdotError::Io(_)));
    }

    #[test]
    fn test_spawn_error_names_package() {
        let err = AurdotError::Spawn {
            package: "ripgrep".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("ripgrep"));
    }
}
