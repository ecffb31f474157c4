use crate::domain::errors::{ApiError, StorageError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.validation")]
    Validation(#[from] ValidationError),
    #[error("checkout.auth_required")]
    AuthRequired,
    /// The order was not accepted; the cart is left as it was.
    #[error("checkout.submission_failed")]
    Submission(ApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum OrderHistoryError {
    #[error("order_history.auth_required")]
    AuthRequired,
    #[error("order_history.unavailable")]
    Unavailable(#[from] ApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error("reorder.empty_order")]
    EmptyOrder,
    #[error("reorder.storage")]
    Storage(#[from] StorageError),
}
