//! Error handling module for the admin console.
//!
//! Provides a central error type covering the two failure families the
//! console distinguishes: network/auth failures and validation failures,
//! with messages sourced from backend response bodies where available.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const TOKEN_ERROR: &str = "TOKEN_ERROR";
    pub const SESSION_ERROR: &str = "SESSION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No valid session, or the backend rejected the credentials/token
    Unauthorized(String),
    /// Resource not found on the backend
    NotFound(String),
    /// Input rejected before or by the backend
    Validation(String),
    /// Backend responded with an unexpected status
    Api { status: u16, message: String },
    /// Transport-level failure (connect, timeout, TLS)
    Network(String),
    /// Token could not be decoded or is missing required claims
    Token(String),
    /// Session file could not be read or written
    Session(String),
    /// Anything else
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Api { .. } => codes::API_ERROR,
            AppError::Network(_) => codes::NETWORK_ERROR,
            AppError::Token(_) => codes::TOKEN_ERROR,
            AppError::Session(_) => codes::SESSION_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { status, message } => format!("backend returned {}: {}", status, message),
            AppError::Network(msg) => msg.clone(),
            AppError::Token(msg) => msg.clone(),
            AppError::Session(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_timeout() {
            AppError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            AppError::Network(format!("Could not reach the backend: {}", err))
        } else {
            AppError::Network(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("Unexpected response format: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Session I/O error: {:?}", err);
        AppError::Session(format!("Session storage error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = AppError::Unauthorized("Please login to make operations".to_string());
        assert_eq!(
            err.to_string(),
            "UNAUTHORIZED: Please login to make operations"
        );
    }

    #[test]
    fn test_api_error_message_includes_status() {
        let err = AppError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.error_code(), codes::API_ERROR);
        assert!(err.message().contains("502"));
    }

    #[test]
    fn test_json_error_maps_to_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.error_code(), codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_io_error_maps_to_session() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io_err.into();
        assert_eq!(err.error_code(), codes::SESSION_ERROR);
    }
}
