use business::domain::catalog::errors::CatalogError;

use crate::commands::error::{CommandError, IntoCommandError};

impl IntoCommandError for CatalogError {
    fn into_command_error(self) -> CommandError {
        match self {
            CatalogError::NotFound => CommandError::new("NotFound", "Coffee not found"),
            CatalogError::Unavailable(_) => CommandError::new(
                "NetworkError",
                "Could not load coffees. Please try again later.",
            ),
        }
    }
}
