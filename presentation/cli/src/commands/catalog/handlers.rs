use std::sync::Arc;

use business::domain::catalog::model::Coffee;
use business::domain::catalog::mood::{Mood, taste_preferences};
use business::domain::catalog::use_cases::get_all::GetAllCoffeesUseCase;
use business::domain::catalog::use_cases::get_by_id::{
    GetCoffeeByIdParams, GetCoffeeByIdUseCase,
};
use business::domain::catalog::use_cases::recommend::{
    RecommendCoffeesParams, RecommendCoffeesUseCase,
};
use business::domain::catalog::zodiac::ZodiacSign;
use business::domain::shared::value_objects::CoffeeId;

use crate::commands::error::{CommandError, IntoCommandError};

pub struct CatalogCommands {
    get_all_use_case: Arc<dyn GetAllCoffeesUseCase>,
    get_by_id_use_case: Arc<dyn GetCoffeeByIdUseCase>,
    recommend_use_case: Arc<dyn RecommendCoffeesUseCase>,
}

impl CatalogCommands {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCoffeesUseCase>,
        get_by_id_use_case: Arc<dyn GetCoffeeByIdUseCase>,
        recommend_use_case: Arc<dyn RecommendCoffeesUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            recommend_use_case,
        }
    }

    pub async fn list(&self) -> Result<String, CommandError> {
        let coffees = self
            .get_all_use_case
            .execute()
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_coffee_list(&coffees, "The catalog is empty."))
    }

    pub async fn show(&self, id: &str) -> Result<String, CommandError> {
        let coffee = self
            .get_by_id_use_case
            .execute(GetCoffeeByIdParams {
                id: CoffeeId::new(id),
            })
            .await
            .map_err(IntoCommandError::into_command_error)?;
        Ok(render_coffee_details(&coffee))
    }

    pub async fn recommend(
        &self,
        sign: Option<&str>,
        mood: Option<&str>,
    ) -> Result<String, CommandError> {
        let zodiac_sign = sign.map(parse_sign).transpose()?;
        let mood = mood.map(Mood::new);
        if zodiac_sign.is_none() && mood.is_none() {
            return Err(CommandError::invalid_input(
                "pick a zodiac sign with --sign or a mood with --mood",
            ));
        }

        let heading = recommend_heading(zodiac_sign, mood.as_ref());
        let coffees = self
            .recommend_use_case
            .execute(RecommendCoffeesParams { zodiac_sign, mood })
            .await
            .map_err(IntoCommandError::into_command_error)?;

        let mut output = heading;
        output.push('\n');
        output.push_str(&render_coffee_list(&coffees, "No coffees to recommend."));
        Ok(output)
    }

    pub fn preferences(&self, sign: &str, mood: Option<&str>) -> Result<String, CommandError> {
        let zodiac_sign = parse_sign(sign)?;
        let mood = mood.map(Mood::new);
        let keywords = taste_preferences(mood.as_ref(), Some(zodiac_sign));
        Ok(format!("Taste profile: {}", keywords.join(", ")))
    }
}

pub fn recommend_heading(sign: Option<ZodiacSign>, mood: Option<&Mood>) -> String {
    let mut heading = String::from("Recommended");
    if let Some(sign) = sign {
        heading.push_str(&format!(
            " for {} ({}, {})",
            sign,
            sign.element(),
            sign.date_range()
        ));
    }
    if let Some(mood) = mood {
        heading.push_str(&format!(" when feeling {}", mood));
    }
    heading.push(':');
    heading
}

pub fn parse_sign(raw: &str) -> Result<ZodiacSign, CommandError> {
    raw.parse::<ZodiacSign>()
        .map_err(CommandError::invalid_input)
}

pub fn render_coffee_line(coffee: &Coffee) -> String {
    match coffee.headline_sign() {
        Some(sign) => format!("{:>6}  {}  {}  [{}]", coffee.id, coffee.name, coffee.price, sign),
        None => format!("{:>6}  {}  {}", coffee.id, coffee.name, coffee.price),
    }
}

pub fn render_coffee_list(coffees: &[Coffee], empty_message: &str) -> String {
    if coffees.is_empty() {
        return empty_message.to_string();
    }
    coffees
        .iter()
        .map(render_coffee_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_coffee_details(coffee: &Coffee) -> String {
    let signs: Vec<String> = coffee.zodiac_signs.iter().map(ToString::to_string).collect();
    let moods: Vec<&str> = coffee.moods.iter().map(Mood::as_str).collect();
    format!(
        "{} ({})\n{}\nPrice: {}\nSigns: {}\nMoods: {}",
        coffee.name,
        coffee.id,
        coffee.description,
        coffee.price,
        signs.join(", "),
        moods.join(", ")
    )
}
