use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Fire => write!(f, "Fire"),
            Element::Earth => write!(f, "Earth"),
            Element::Air => write!(f, "Air"),
            Element::Water => write!(f, "Water"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    /// First day of the sign as (month, day).
    fn starts_on(&self) -> (u32, u32) {
        match self {
            ZodiacSign::Aries => (3, 21),
            ZodiacSign::Taurus => (4, 20),
            ZodiacSign::Gemini => (5, 21),
            ZodiacSign::Cancer => (6, 21),
            ZodiacSign::Leo => (7, 23),
            ZodiacSign::Virgo => (8, 23),
            ZodiacSign::Libra => (9, 23),
            ZodiacSign::Scorpio => (10, 23),
            ZodiacSign::Sagittarius => (11, 22),
            ZodiacSign::Capricorn => (12, 22),
            ZodiacSign::Aquarius => (1, 20),
            ZodiacSign::Pisces => (2, 19),
        }
    }

    /// Human-readable date range, e.g. "Mar 21 - Apr 19".
    pub fn date_range(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Mar 21 - Apr 19",
            ZodiacSign::Taurus => "Apr 20 - May 20",
            ZodiacSign::Gemini => "May 21 - Jun 20",
            ZodiacSign::Cancer => "Jun 21 - Jul 22",
            ZodiacSign::Leo => "Jul 23 - Aug 22",
            ZodiacSign::Virgo => "Aug 23 - Sep 22",
            ZodiacSign::Libra => "Sep 23 - Oct 22",
            ZodiacSign::Scorpio => "Oct 23 - Nov 21",
            ZodiacSign::Sagittarius => "Nov 22 - Dec 21",
            ZodiacSign::Capricorn => "Dec 22 - Jan 19",
            ZodiacSign::Aquarius => "Jan 20 - Feb 18",
            ZodiacSign::Pisces => "Feb 19 - Mar 20",
        }
    }

    /// Sign of someone born on `date`.
    pub fn for_date(date: NaiveDate) -> ZodiacSign {
        let month_day = (date.month(), date.day());
        // The sign whose start is the latest one not after `date`; early
        // January falls back to Capricorn, which started in December.
        ZodiacSign::ALL
            .iter()
            .filter(|sign| sign.starts_on() <= month_day)
            .max_by_key(|sign| sign.starts_on())
            .copied()
            .unwrap_or(ZodiacSign::Capricorn)
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .iter()
            .find(|sign| sign.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Invalid zodiac sign: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_parse_sign_case_insensitively() {
        assert_eq!("leo".parse::<ZodiacSign>().unwrap(), ZodiacSign::Leo);
        assert_eq!(" PISCES ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Pisces);
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn should_derive_sign_from_birth_date() {
        assert_eq!(ZodiacSign::for_date(date(1990, 3, 21)), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::for_date(date(1990, 4, 19)), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::for_date(date(1990, 4, 20)), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::for_date(date(1990, 8, 1)), ZodiacSign::Leo);
    }

    #[test]
    fn should_wrap_capricorn_across_new_year() {
        assert_eq!(ZodiacSign::for_date(date(1990, 12, 25)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_date(date(1991, 1, 5)), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_date(date(1991, 1, 20)), ZodiacSign::Aquarius);
    }

    #[test]
    fn should_group_signs_by_element() {
        let fire: Vec<_> = ZodiacSign::ALL
            .iter()
            .filter(|sign| sign.element() == Element::Fire)
            .collect();
        assert_eq!(fire.len(), 3);
        assert_eq!(ZodiacSign::Scorpio.element(), Element::Water);
    }
}
