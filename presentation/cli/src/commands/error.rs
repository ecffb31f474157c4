use business::domain::errors::ValidationError;

/// A failed command, ready to be shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub name: &'static str,
    pub message: String,
}

impl CommandError {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new("InvalidInput", message)
    }
}

pub trait IntoCommandError {
    fn into_command_error(self) -> CommandError;
}

impl IntoCommandError for ValidationError {
    fn into_command_error(self) -> CommandError {
        let message = match self {
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::PasswordMismatch => "Passwords do not match",
            ValidationError::PasswordTooShort => "Password must be at least 6 characters long",
            ValidationError::MissingBirthDate => "Please select your date of birth",
            ValidationError::InvalidBirthDate => "Please enter a valid date of birth (YYYY-MM-DD)",
            ValidationError::Underage => "You must be 18 or older to register",
            ValidationError::EmptyCart => "Your cart is empty!",
        };
        CommandError::new("ValidationError", message)
    }
}
