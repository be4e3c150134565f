//! Error types for the fund-disbursement console.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a console action can end in: client-side validation,
//! HTTP failures reported by the service, transport failures, and
//! authentication failures that tear the session down.

use thiserror::Error;

/// Message shown when neither the server nor the transport supplied one.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The main error type for the fund-disbursement console.
///
/// All operations in the crate return this error type. Callers normally only
/// need [`ConsoleError::user_message`] to surface the failure.
///
/// # Example
///
/// ```
/// use fund_disbursement::error::ConsoleError;
///
/// let error = ConsoleError::Validation {
///     field: "multiplier".to_string(),
///     message: "Multiplier must be 0 or 1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Multiplier must be 0 or 1");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input was rejected before any request was issued.
    #[error("{message}")]
    Validation {
        /// The offending input field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// The service answered with a non-success status other than 401/403.
    #[error("{status} {reason}: {message}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status.
        reason: String,
        /// The server-supplied message, or a generic fallback.
        message: String,
    },

    /// The request never produced a response.
    #[error("{message}")]
    Network {
        /// The transport error text.
        message: String,
    },

    /// The service rejected the credentials (401/403).
    ///
    /// By the time this is returned the stored session has been cleared and
    /// the navigator redirected to the login route.
    #[error("{status} {reason}: {message}")]
    Unauthorized {
        /// The HTTP status code (401 or 403).
        status: u16,
        /// The canonical reason phrase for the status.
        reason: String,
        /// The server-supplied message, or a generic fallback.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("Failed to decode response from '{path}': {message}")]
    Decode {
        /// The request path.
        path: String,
        /// A description of the decode error.
        message: String,
    },

    /// The service reported success but omitted the payload.
    #[error("Response from '{path}' carried no data")]
    MissingData {
        /// The request path.
        path: String,
    },

    /// Login was answered but not accepted.
    #[error("{message}")]
    LoginRejected {
        /// The server-supplied message.
        message: String,
    },

    /// An access token could not be decoded into user claims.
    #[error("Invalid token received: {message}")]
    InvalidToken {
        /// A description of the decode failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration could not be parsed or is inconsistent.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The path (or source name) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persisted session could not be read or written.
    #[error("Session storage error: {message}")]
    Session {
        /// A description of the storage error.
        message: String,
    },
}

/// A type alias for Results that return ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    /// Creates a validation error for a field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error was raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConsoleError::Validation { .. })
    }

    /// Returns true if the error tore down the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ConsoleError::Unauthorized { .. })
    }

    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Http { status, .. } | ConsoleError::Unauthorized { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns the text a notification should show for this error.
    ///
    /// Empty messages collapse to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(error: serde_json::Error) -> Self {
        ConsoleError::Decode {
            path: "<json>".to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_message_only() {
        let error = ConsoleError::validation("startDate", "Start date must be before end date");
        assert_eq!(error.to_string(), "Start date must be before end date");
        assert!(error.is_validation());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_error_displays_status_reason_and_message() {
        let error = ConsoleError::Http {
            status: 409,
            reason: "Conflict".to_string(),
            message: "Position already exists".to_string(),
        };
        assert_eq!(error.to_string(), "409 Conflict: Position already exists");
        assert_eq!(error.status(), Some(409));
    }

    #[test]
    fn test_unauthorized_is_flagged() {
        let error = ConsoleError::Unauthorized {
            status: 401,
            reason: "Unauthorized".to_string(),
            message: "Token expired".to_string(),
        };
        assert_eq!(error.to_string(), "401 Unauthorized: Token expired");
        assert!(error.is_unauthorized());
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_network_error_displays_transport_text() {
        let error = ConsoleError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.user_message(), "connection refused");
    }

    #[test]
    fn test_empty_message_falls_back_to_generic() {
        let error = ConsoleError::Network {
            message: "  ".to_string(),
        };
        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ConsoleError::ConfigNotFound {
            path: "/missing/console.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/console.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ConsoleError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn fails() -> ConsoleResult<()> {
            Err(ConsoleError::validation("uuid", "Invalid UUID format"))
        }

        fn propagates() -> ConsoleResult<()> {
            fails()?;
            Ok(())
        }

        assert!(propagates().unwrap_err().is_validation());
    }
}
