use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::mood::Mood;
use crate::domain::catalog::zodiac::ZodiacSign;

pub struct RecommendCoffeesParams {
    pub zodiac_sign: Option<ZodiacSign>,
    pub mood: Option<Mood>,
}

#[async_trait]
pub trait RecommendCoffeesUseCase: Send + Sync {
    async fn execute(&self, params: RecommendCoffeesParams) -> Result<Vec<Coffee>, CatalogError>;
}
