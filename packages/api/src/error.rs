//! Error taxonomy for calls to the catalog API.

use thiserror::Error;

/// Everything that can go wrong between a view and the remote service.
///
/// Views never match on HTTP details. They ask two questions:
/// [`is_auth_failure`](ApiError::is_auth_failure) (drop the session and go to
/// login) and [`user_message`](ApiError::user_message) (what to show).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, timeout, CORS).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401/403: the stored token is missing, expired, or not allowed here.
    #[error("unauthorized ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Unauthorized { status: u16, message: Option<String> },

    /// The server refused because the record already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other refusal, either a non-2xx status or `success: false`.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A plant id failed the 24-hex-character shape check. No request was sent.
    #[error("Invalid plant ID. ID must be 24 characters long and contain only hexadecimal characters.")]
    InvalidPlantId(String),
}

impl ApiError {
    /// Whether this failure invalidates the current session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The message the server attached, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. } | ApiError::Rejected { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            ApiError::Conflict(message) => Some(message),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::InvalidPlantId(_) => None,
        }
    }

    /// Text for a user-visible notification: the server's message when there is
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::InvalidPlantId(_) => self.to_string(),
            ApiError::Unauthorized { .. } => "Session expired. Please login again".to_string(),
            _ => self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("email not found".into()),
        };
        assert_eq!(err.user_message("Failed"), "email not found");

        let err = ApiError::Rejected {
            status: 500,
            message: Some("  ".into()),
        };
        assert_eq!(err.user_message("Failed"), "Failed");
    }

    #[test]
    fn test_auth_failure_classification() {
        let err = ApiError::Unauthorized {
            status: 401,
            message: None,
        };
        assert!(err.is_auth_failure());
        assert_eq!(err.user_message("x"), "Session expired. Please login again");

        assert!(!ApiError::Conflict("plant already exist".into()).is_auth_failure());
        assert!(!ApiError::Decode("bad".into()).is_auth_failure());
    }

    #[test]
    fn test_invalid_id_message_is_local() {
        let err = ApiError::InvalidPlantId("123".into());
        assert!(err.user_message("ignored").starts_with("Invalid plant ID"));
    }
}
