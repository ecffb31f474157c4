use crate::domain::errors::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Unavailable(#[from] ApiError),
}
