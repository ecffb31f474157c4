use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::model::FavoriteSet;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::GetFavoritesUseCase;
use crate::domain::logger::Logger;

pub struct GetFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoritesUseCase for GetFavoritesUseCaseImpl {
    async fn execute(&self) -> FavoriteSet {
        self.repository.load().await.unwrap_or_else(|err| {
            self.logger
                .warn(&format!("Favorites could not be read: {}", err));
            FavoriteSet::new()
        })
    }
}
