/// Local persistent store errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.malformed")]
    Malformed,
}

impl StorageError {
    pub fn unavailable() -> Self {
        StorageError::Unavailable
    }
    pub fn malformed() -> Self {
        StorageError::Malformed
    }
}

/// Errors raised by calls to the remote storefront API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("api.network")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("api.status")]
    Status { status: u16, message: Option<String> },
    /// The response body did not have the expected shape.
    #[error("api.decode")]
    Decode(String),
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        ApiError::Network(detail.into())
    }

    pub fn status(status: u16, message: Option<String>) -> Self {
        ApiError::Status { status, message }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        ApiError::Decode(detail.into())
    }

    /// Message supplied by the server in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// User input that fails a precondition. Nothing is mutated and no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation.missing_fields")]
    MissingFields,
    #[error("validation.password_mismatch")]
    PasswordMismatch,
    #[error("validation.password_too_short")]
    PasswordTooShort,
    #[error("validation.missing_birth_date")]
    MissingBirthDate,
    #[error("validation.invalid_birth_date")]
    InvalidBirthDate,
    #[error("validation.underage")]
    Underage,
    #[error("validation.empty_cart")]
    EmptyCart,
}
