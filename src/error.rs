//! Custom error types for the SimpleBudget client
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SimpleBudget client operations
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The API rejected a request with a non-success status.
    ///
    /// The message has already been through the error normalizer and is
    /// safe to show to the user as-is.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout). The message is the operation's generic
    /// fallback; the underlying cause is logged, not displayed.
    #[error("{0}")]
    Transport(String),

    /// Client-side validation errors (rejected before any request is sent)
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl AppError {
    /// Create an API error from a status code and a normalized message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this is an API error with a 401 status
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Check if this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The message to show the user for this error
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SimpleBudget client operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let err = AppError::api(400, "Full Name: is required");
        assert_eq!(err.to_string(), "Full Name: is required");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let err = AppError::api(401, "Invalid token");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_transport_shows_fallback() {
        let err = AppError::Transport("Login failed".into());
        assert_eq!(err.to_string(), "Login failed");
        assert!(err.is_transport());
    }

    #[test]
    fn test_validation() {
        let err = AppError::Validation("expense amount must be greater than zero".into());
        assert!(err.is_validation());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
