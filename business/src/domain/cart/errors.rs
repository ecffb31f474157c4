#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.storage")]
    Storage(#[from] crate::domain::errors::StorageError),
}
