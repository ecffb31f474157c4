use async_trait::async_trait;

use crate::domain::catalog::model::Coffee;
use crate::domain::favorite::errors::FavoriteError;

#[async_trait]
pub trait GetFavoriteCoffeesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Coffee>, FavoriteError>;
}
