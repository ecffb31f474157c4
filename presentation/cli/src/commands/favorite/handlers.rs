use std::sync::Arc;

use business::domain::favorite::use_cases::get_all::GetFavoritesUseCase;
use business::domain::favorite::use_cases::get_coffees::GetFavoriteCoffeesUseCase;
use business::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use business::domain::shared::value_objects::CoffeeId;

use crate::commands::catalog::handlers::render_coffee_list;
use crate::commands::error::{CommandError, IntoCommandError};

pub struct FavoriteCommands {
    toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
    get_all_use_case: Arc<dyn GetFavoritesUseCase>,
    get_coffees_use_case: Arc<dyn GetFavoriteCoffeesUseCase>,
}

impl FavoriteCommands {
    pub fn new(
        toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
        get_all_use_case: Arc<dyn GetFavoritesUseCase>,
        get_coffees_use_case: Arc<dyn GetFavoriteCoffeesUseCase>,
    ) -> Self {
        Self {
            toggle_use_case,
            get_all_use_case,
            get_coffees_use_case,
        }
    }

    pub async fn toggle(&self, id: &str) -> Result<String, CommandError> {
        let is_favorite = self
            .toggle_use_case
            .execute(ToggleFavoriteParams {
                coffee_id: CoffeeId::new(id),
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(if is_favorite {
            format!("Coffee {} added to favorites.", id)
        } else {
            format!("Coffee {} removed from favorites.", id)
        })
    }

    pub async fn list(&self) -> Result<String, CommandError> {
        if self.get_all_use_case.execute().await.is_empty() {
            return Ok("No favorites yet.".to_string());
        }
        let coffees = self
            .get_coffees_use_case
            .execute()
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_coffee_list(
            &coffees,
            "None of your favorites are in the catalog anymore.",
        ))
    }
}
