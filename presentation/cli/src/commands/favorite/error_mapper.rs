use business::domain::favorite::errors::FavoriteError;

use crate::commands::error::{CommandError, IntoCommandError};

impl IntoCommandError for FavoriteError {
    fn into_command_error(self) -> CommandError {
        match self {
            FavoriteError::Storage(_) => {
                CommandError::new("StorageError", "Failed to update favorites.")
            }
            FavoriteError::Catalog(_) => CommandError::new(
                "NetworkError",
                "Could not load your favorite coffees. Please try again later.",
            ),
        }
    }
}
