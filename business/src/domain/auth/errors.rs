use crate::domain::errors::{ApiError, StorageError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.validation")]
    Validation(#[from] ValidationError),
    /// Credentials or registration refused, with the server message or a generic one.
    #[error("auth.rejected")]
    Rejected { message: String },
    #[error("auth.network")]
    Network(ApiError),
    #[error("auth.storage")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Maps a failed login/register call, keeping the server message when present.
    pub fn from_api(error: ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Status {
                message: Some(message),
                ..
            } => AuthError::Rejected { message },
            ApiError::Status { message: None, .. } | ApiError::Decode(_) => AuthError::Rejected {
                message: fallback.to_string(),
            },
            ApiError::Network(_) => AuthError::Network(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_server_message_when_rejected() {
        let error = AuthError::from_api(
            ApiError::status(401, Some("Invalid email or password".to_string())),
            "Login failed",
        );

        assert!(matches!(error, AuthError::Rejected { message } if message == "Invalid email or password"));
    }

    #[test]
    fn should_fall_back_to_generic_message() {
        let error = AuthError::from_api(ApiError::status(500, None), "Login failed");

        assert!(matches!(error, AuthError::Rejected { message } if message == "Login failed"));
    }

    #[test]
    fn should_keep_network_failures_apart() {
        let error = AuthError::from_api(ApiError::network("refused"), "Login failed");

        assert!(matches!(error, AuthError::Network(_)));
    }
}
