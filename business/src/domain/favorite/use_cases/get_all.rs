use async_trait::async_trait;

use crate::domain::favorite::model::FavoriteSet;

#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> FavoriteSet;
}
