#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.storage")]
    Storage(#[from] crate::domain::errors::StorageError),
    #[error("favorite.catalog_unavailable")]
    Catalog(#[from] crate::domain::errors::ApiError),
}
