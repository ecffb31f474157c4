use business::domain::order::errors::{CheckoutError, OrderHistoryError, ReorderError};

use crate::commands::error::{CommandError, IntoCommandError};

impl IntoCommandError for CheckoutError {
    fn into_command_error(self) -> CommandError {
        match self {
            CheckoutError::Validation(error) => error.into_command_error(),
            CheckoutError::AuthRequired => CommandError::new(
                "AuthRequired",
                "User not logged in. Please log in to place an order.",
            ),
            CheckoutError::Submission(error) => CommandError::new(
                "SubmissionError",
                error.server_message().map(str::to_string).unwrap_or_else(|| {
                    "There was an error placing your order. Please try again.".to_string()
                }),
            ),
        }
    }
}

impl IntoCommandError for OrderHistoryError {
    fn into_command_error(self) -> CommandError {
        match self {
            OrderHistoryError::AuthRequired => {
                CommandError::new("AuthRequired", "User not logged in.")
            }
            OrderHistoryError::Unavailable(_) => {
                CommandError::new("NetworkError", "Failed to load user data.")
            }
        }
    }
}

impl IntoCommandError for ReorderError {
    fn into_command_error(self) -> CommandError {
        match self {
            ReorderError::EmptyOrder => {
                CommandError::new("ValidationError", "This order has no items to reorder")
            }
            ReorderError::Storage(_) => CommandError::new(
                "StorageError",
                "Failed to add item to cart. Please try again.",
            ),
        }
    }
}
