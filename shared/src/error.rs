//! Error types for the RSVP Lambda function.

use lambda_http::http::StatusCode;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling an RSVP request.
#[derive(Error, Debug)]
pub enum Error {
    /// Request used a method other than POST, OPTIONS or HEAD
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    /// POST body was not declared as JSON
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    /// Body could not be parsed as JSON
    #[error("Invalid request body: {0}")]
    InvalidJson(serde_json::Error),

    /// A required submission field was absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Validation error
    #[error("{0}")]
    Validation(String),

    /// The email provider answered with a non-success status
    #[error("Resend failed")]
    Upstream { status: u16, detail: String },

    /// The email provider could not be reached or timed out
    #[error("Email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::InvalidJson(_) | Error::MissingField(_) | Error::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Diagnostic text passed through to the caller alongside the error message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Upstream { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether the fault lies with the caller's request rather than with us or the provider.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(Error::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(Error::UnsupportedMediaType.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(Error::MissingField("veg").status_code(), StatusCode::BAD_REQUEST);
        assert!(Error::Validation("bad".into()).is_client_error());
    }

    #[test]
    fn test_upstream_error_carries_detail() {
        let err = Error::Upstream {
            status: 422,
            detail: "invalid `to` field".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Resend failed");
        assert_eq!(err.detail(), Some("invalid `to` field"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_missing_field_message_names_field() {
        assert_eq!(Error::MissingField("guest_count").to_string(), "Missing field: guest_count");
    }
}
