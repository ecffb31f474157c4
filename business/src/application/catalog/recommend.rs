use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Coffee;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::recommend::{
    RecommendCoffeesParams, RecommendCoffeesUseCase,
};
use crate::domain::logger::Logger;

/// How many catalog entries are offered when nothing matches the filter.
const FALLBACK_COUNT: usize = 3;

/// Filters the catalog by zodiac sign and by mood, each only when given.
/// Without either there is nothing to recommend.
pub struct RecommendCoffeesUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendCoffeesUseCase for RecommendCoffeesUseCaseImpl {
    async fn execute(&self, params: RecommendCoffeesParams) -> Result<Vec<Coffee>, CatalogError> {
        if params.zodiac_sign.is_none() && params.mood.is_none() {
            self.logger
                .debug("Neither zodiac sign nor mood given, nothing to recommend");
            return Ok(vec![]);
        }

        self.logger.info(&format!(
            "Recommending coffees (sign: {}, mood: {})",
            params
                .zodiac_sign
                .map(|sign| sign.to_string())
                .unwrap_or_else(|| "any".to_string()),
            params.mood.as_ref().map(|m| m.as_str()).unwrap_or("any")
        ));

        let coffees = self.catalog.list_coffees().await?;

        let matches: Vec<Coffee> = coffees
            .iter()
            .filter(|coffee| params.zodiac_sign.is_none_or(|sign| coffee.matches_sign(sign)))
            .filter(|coffee| {
                params
                    .mood
                    .as_ref()
                    .is_none_or(|mood| coffee.matches_mood(mood))
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            self.logger
                .info("No coffee matched, falling back to the first catalog entries");
            return Ok(coffees.into_iter().take(FALLBACK_COUNT).collect());
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::mood::Mood;
    use crate::domain::catalog::zodiac::ZodiacSign;
    use crate::domain::errors::ApiError;
    use crate::domain::shared::value_objects::{CoffeeId, Money};
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn list_coffees(&self) -> Result<Vec<Coffee>, ApiError>;
            async fn get_coffee(&self, id: &CoffeeId) -> Result<Coffee, ApiError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn coffee(id: &str, signs: Vec<ZodiacSign>, moods: &[&str]) -> Coffee {
        Coffee {
            id: CoffeeId::new(id),
            name: format!("Coffee {id}"),
            description: String::new(),
            image: String::new(),
            price: Money::from_major(200),
            zodiac_signs: signs,
            moods: moods.iter().map(Mood::new).collect(),
        }
    }

    fn catalog() -> Vec<Coffee> {
        vec![
            coffee("1", vec![ZodiacSign::Aries, ZodiacSign::Leo], &["energetic"]),
            coffee("2", vec![ZodiacSign::Taurus], &["calm"]),
            coffee("3", vec![ZodiacSign::Leo], &["happy"]),
            coffee("4", vec![ZodiacSign::Pisces], &["tired"]),
        ]
    }

    fn ids(coffees: &[Coffee]) -> Vec<&str> {
        coffees.iter().map(|c| c.id.as_str()).collect()
    }

    #[tokio::test]
    async fn should_filter_by_sign() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().returning(|| Ok(catalog()));

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: Some(ZodiacSign::Leo),
                mood: None,
            })
            .await
            .unwrap();

        assert_eq!(ids(&coffees), vec!["1", "3"]);
    }

    #[tokio::test]
    async fn should_narrow_by_mood_when_given() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().returning(|| Ok(catalog()));

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: Some(ZodiacSign::Leo),
                mood: Some(Mood::new("Happy")),
            })
            .await
            .unwrap();

        assert_eq!(ids(&coffees), vec!["3"]);
    }

    #[tokio::test]
    async fn should_fall_back_to_first_three_when_nothing_matches() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().returning(|| Ok(catalog()));

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: Some(ZodiacSign::Capricorn),
                mood: None,
            })
            .await
            .unwrap();

        assert_eq!(ids(&coffees), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn should_recommend_by_mood_alone() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().returning(|| Ok(catalog()));

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: None,
                mood: Some(Mood::new("happy")),
            })
            .await
            .unwrap();

        assert_eq!(ids(&coffees), vec!["3"]);
    }

    #[tokio::test]
    async fn should_fall_back_when_mood_alone_matches_nothing() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().returning(|| Ok(catalog()));

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: None,
                mood: Some(Mood::new("anxious")),
            })
            .await
            .unwrap();

        assert_eq!(ids(&coffees), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn should_not_call_catalog_without_sign_or_mood() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_list_coffees().never();

        let use_case = RecommendCoffeesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let coffees = use_case
            .execute(RecommendCoffeesParams {
                zodiac_sign: None,
                mood: None,
            })
            .await
            .unwrap();

        assert!(coffees.is_empty());
    }
}
