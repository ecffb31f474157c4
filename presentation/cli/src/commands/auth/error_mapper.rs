use business::domain::auth::errors::AuthError;

use crate::commands::error::{CommandError, IntoCommandError};

impl IntoCommandError for AuthError {
    fn into_command_error(self) -> CommandError {
        match self {
            AuthError::Validation(error) => error.into_command_error(),
            AuthError::Rejected { message } => CommandError::new("AuthError", message),
            AuthError::Network(_) => CommandError::new(
                "NetworkError",
                "Could not reach the server. Please try again.",
            ),
            AuthError::Storage(_) => CommandError::new(
                "StorageError",
                "Signed in, but the session could not be saved on this device",
            ),
        }
    }
}
