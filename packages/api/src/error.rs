//! Errors surfaced by the API client.

use serde::Deserialize;
use thiserror::Error;

/// Convenience alias for client method return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call. The client never retries, so every variant is
/// terminal for the action that issued it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered 401. The login redirect has already been triggered.
    #[error("Unauthorized")]
    Unauthorized,

    /// Non-2xx answer other than 401, with the server's message when it sent one.
    #[error("Server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response (network failure or timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// A body could not be encoded or a response could not be decoded.
    #[error("Invalid payload: {0}")]
    Payload(String),
}

/// Error body shapes the backend uses: `{"message": ".."}` or `{"error": ".."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response, extracting the server message
    /// from the body when it is JSON.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        ApiError::Server { status, message }
    }

    /// The text to show the user: the server's message verbatim when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_extracted() {
        let err = ApiError::from_status(400, r#"{"message": "Serial number already exists"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("Serial number already exists".to_string())
            }
        );
        assert_eq!(err.user_message("Failed to save"), "Serial number already exists");
    }

    #[test]
    fn test_error_field_extracted() {
        let err = ApiError::from_status(409, r#"{"error": "Project already picked"}"#);
        assert_eq!(err.user_message("x"), "Project already picked");
    }

    #[test]
    fn test_non_json_body_uses_fallback() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message("Failed to fetch projects"), "Failed to fetch projects");
    }

    #[test]
    fn test_blank_message_ignored() {
        let err = ApiError::from_status(500, r#"{"message": "  "}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_401_is_unauthorized() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn test_transport_uses_fallback() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message("Failed to submit"), "Failed to submit");
    }
}
