use business::domain::cart::errors::CartError;

use crate::commands::error::{CommandError, IntoCommandError};

impl IntoCommandError for CartError {
    fn into_command_error(self) -> CommandError {
        match self {
            CartError::Storage(_) => CommandError::new(
                "StorageError",
                "Failed to update the cart. Please try again.",
            ),
        }
    }
}
