use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::zodiac::ZodiacSign;

/// A mood label such as "happy" or "stressed", normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mood(String);

impl Mood {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Mood::new(label))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service port for the facial mood detector.
///
/// The detector is opaque to the storefront: it either recognizes a mood or
/// reports that it could not (no face, camera denied, ...).
#[async_trait]
pub trait MoodDetector: Send + Sync {
    async fn detect(&self) -> Option<Mood>;
}

fn mood_keywords(mood: &Mood) -> &'static [&'static str] {
    match mood.as_str() {
        "happy" => &["sweet", "fruity"],
        "sad" => &["comforting", "chocolate"],
        "angry" => &["strong", "intense"],
        "surprised" => &["unique", "exotic"],
        "neutral" => &["balanced", "classic"],
        _ => &[],
    }
}

fn sign_keywords(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aries => &["bold", "spicy"],
        ZodiacSign::Taurus => &["rich", "creamy"],
        ZodiacSign::Gemini => &["complex", "varied"],
        ZodiacSign::Cancer => &["smooth", "comforting"],
        ZodiacSign::Leo => &["premium", "distinctive"],
        ZodiacSign::Virgo => &["precise", "clean"],
        ZodiacSign::Libra => &["balanced", "harmonious"],
        ZodiacSign::Scorpio => &["intense", "dark"],
        ZodiacSign::Sagittarius => &["adventurous", "exotic"],
        ZodiacSign::Capricorn => &["traditional", "reliable"],
        ZodiacSign::Aquarius => &["innovative", "unique"],
        ZodiacSign::Pisces => &["dreamy", "subtle"],
    }
}

/// Flavor keywords for a mood and sign, mood first. Unknown moods contribute nothing.
pub fn taste_preferences(mood: Option<&Mood>, sign: Option<ZodiacSign>) -> Vec<&'static str> {
    let from_mood = mood.map(mood_keywords).unwrap_or_default();
    let from_sign = sign.map(sign_keywords).unwrap_or_default();
    from_mood.iter().chain(from_sign.iter()).copied().collect()
}
