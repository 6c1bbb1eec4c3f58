//! Session Error Types

use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Failure taxonomy for session operations.
///
/// `login`/`register` propagate these to the caller for presentation;
/// `initialize` recovers from all of them internally and `logout`
/// cannot fail.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Backend unreachable (DNS, connect, TLS, interrupted body)
    #[error("backend unreachable: {0}")]
    Network(String),

    /// Backend rejected the credential (unauthorized/forbidden)
    #[error("credential rejected by backend")]
    RejectedCredential,

    /// Caller-side validation failed; checked before any network call
    #[error("validation failed: {0}")]
    Validation(String),

    /// Any other non-success backend response
    #[error("unexpected backend response ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Durable credential storage failed
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<platform::http::HttpError> for SessionError {
    fn from(err: platform::http::HttpError) -> Self {
        use platform::http::HttpError;
        match err {
            HttpError::Transport(e) => SessionError::Network(e.to_string()),
            HttpError::Status {
                status: status @ (401 | 403),
                ..
            } => {
                tracing::debug!(status, "Backend rejected credential");
                SessionError::RejectedCredential
            }
            HttpError::Status { status, body } => SessionError::Backend {
                status,
                message: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::http::HttpError;

    fn status(status: u16, body: &str) -> HttpError {
        HttpError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_unauthorized_classified_as_rejection() {
        assert!(matches!(
            SessionError::from(status(401, "Invalid credentials")),
            SessionError::RejectedCredential
        ));
        assert!(matches!(
            SessionError::from(status(403, "Forbidden")),
            SessionError::RejectedCredential
        ));
    }

    #[test]
    fn test_other_statuses_classified_as_backend() {
        let err = SessionError::from(status(500, "boom"));
        match err {
            SessionError::Backend { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert!(SessionError::RejectedCredential.to_string().contains("rejected"));
        assert!(
            SessionError::Validation("Passwords do not match".to_string())
                .to_string()
                .contains("Passwords do not match")
        );
    }
}
