use crate::domain::shared::value_objects::{CoffeeId, Money};

use super::mood::Mood;
use super::zodiac::ZodiacSign;

/// A coffee as published by the remote catalog. Read-only for the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Money,
    pub zodiac_signs: Vec<ZodiacSign>,
    pub moods: Vec<Mood>,
}

impl Coffee {
    pub fn matches_sign(&self, sign: ZodiacSign) -> bool {
        self.zodiac_signs.contains(&sign)
    }

    pub fn matches_mood(&self, mood: &Mood) -> bool {
        self.moods.contains(mood)
    }

    /// The sign shown on the coffee card badge.
    pub fn headline_sign(&self) -> Option<ZodiacSign> {
        self.zodiac_signs.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn espresso() -> Coffee {
        Coffee {
            id: CoffeeId::new("1"),
            name: "Bold Aries Espresso".to_string(),
            description: "Dark chocolate and spice".to_string(),
            image: "espresso.jpg".to_string(),
            price: Money::from_major(180),
            zodiac_signs: vec![ZodiacSign::Aries, ZodiacSign::Leo, ZodiacSign::Sagittarius],
            moods: vec![Mood::new("energetic"), Mood::new("stressed")],
        }
    }

    #[test]
    fn should_match_listed_sign_and_mood() {
        let coffee = espresso();

        assert!(coffee.matches_sign(ZodiacSign::Leo));
        assert!(!coffee.matches_sign(ZodiacSign::Pisces));
        assert!(coffee.matches_mood(&Mood::new("Energetic")));
        assert!(!coffee.matches_mood(&Mood::new("tired")));
    }

    #[test]
    fn should_use_first_sign_as_headline() {
        assert_eq!(espresso().headline_sign(), Some(ZodiacSign::Aries));
    }
}
