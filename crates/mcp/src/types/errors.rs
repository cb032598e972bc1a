//! Error types for server probing.
//!
//! None of these cross the public entry points: the prober converts them into
//! fields of a `TestResult` and the installation code parser degrades to a
//! best-effort config. Completion failures never abort a test, so they are
//! reported through [`FunctionalityFailure`] inside the functionality section.
//! Their `Display` output is what ends up in front of the user, so messages
//! are written as complete sentences.

use crate::config::ValidationError;
use serde_json::Value;
use thiserror::Error;

/// Main error type for a single test run.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// The server configuration is unusable; raised before any network call.
    #[error(transparent)]
    Configuration(#[from] ValidationError),

    /// The server could not be reached by the health probe or its fallback.
    #[error("{message}")]
    Connection { message: String },

    /// The HTTP client itself could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The installation code could not be read at all.
    #[error("Installation code could not be parsed: {reason}")]
    Parse { reason: String },
}

impl InspectorError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse { reason: reason.into() }
    }
}

/// Classified failure of a completion request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionalityFailure {
    /// The server answered with a status outside the 2xx range.
    #[error("Server responded with error: {status} - {status_text}{}", details_suffix(.body))]
    Status {
        status: u16,
        status_text: String,
        body: Option<Value>,
    },

    /// The request went out but no response came back (refused, reset, timed out).
    #[error("No response received from server. Server might be unreachable or not running.")]
    NoResponse,

    /// The request could not be built or handed to the transport.
    #[error("Error setting up request: {message}")]
    Request { message: String },
}

impl FunctionalityFailure {
    /// Classify a transport-level `reqwest` error.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Request {
                message: error.to_string(),
            }
        } else {
            Self::NoResponse
        }
    }

    /// HTTP status code, for failures where the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn details_suffix(body: &Option<Value>) -> String {
    match body {
        Some(value) => format!("\nDetails: {}", value),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_failure_includes_code_text_and_body() {
        let failure = FunctionalityFailure::Status {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: Some(json!({"error": "invalid key"})),
        };
        assert_eq!(
            failure.to_string(),
            "Server responded with error: 401 - Unauthorized\nDetails: {\"error\":\"invalid key\"}"
        );
        assert_eq!(failure.status(), Some(401));
    }

    #[test]
    fn status_failure_without_body_has_no_details() {
        let failure = FunctionalityFailure::Status {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            body: None,
        };
        assert_eq!(failure.to_string(), "Server responded with error: 502 - Bad Gateway");
    }

    #[test]
    fn text_body_is_quoted_like_serialized_json() {
        let failure = FunctionalityFailure::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: Some(json!("oops")),
        };
        assert!(failure.to_string().ends_with("Details: \"oops\""));
    }

    #[test]
    fn no_response_message_is_generic() {
        let message = FunctionalityFailure::NoResponse.to_string();
        assert!(message.contains("unreachable"));
        assert_eq!(FunctionalityFailure::NoResponse.status(), None);
    }

    #[test]
    fn request_failure_carries_cause() {
        let failure = FunctionalityFailure::Request {
            message: "builder error".to_string(),
        };
        assert_eq!(failure.to_string(), "Error setting up request: builder error");
    }

    #[test]
    fn configuration_error_is_transparent() {
        let err = InspectorError::from(ValidationError::MissingServerUrl);
        assert_eq!(err.to_string(), "Server URL is required");
        assert!(matches!(InspectorError::connection("down"), InspectorError::Connection { .. }));
        assert!(matches!(InspectorError::parse("null"), InspectorError::Parse { .. }));
    }
}
