use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a user identifier as issued by the remote API (`_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog identifier of a coffee.
///
/// The bundled catalog uses numeric ids while the remote API hands out
/// string ids, so both are accepted when reading and the id is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CoffeeId(String);

impl CoffeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoffeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for CoffeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Ok(CoffeeId(text)),
            RawId::Number(number) => Ok(CoffeeId(number.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("price.invalid")]
    Invalid(String),
}

static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:₹|Rs\.?|INR)?\s*(\d+)(?:\.(\d{1,2}))?\s*$")
        .expect("price pattern must compile")
});

const MINOR_PER_MAJOR: i64 = 100;

/// An amount of rupees held as integer paise.
///
/// Prices reach the storefront either as display strings (`"₹180"`) or as raw
/// numbers (`180`, `180.5`). Both forms are converted here and every
/// computation happens on the integer minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Converts a decimal amount, rounding to the nearest paisa.
    /// Returns `None` for negative or non-finite values.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        Some(Self((amount * MINOR_PER_MAJOR as f64).round() as i64))
    }

    /// Parses a display price such as `"₹180"`, `"Rs. 99.5"` or `"1,200.00"`.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let cleaned = input.replace(',', "");
        let captures = PRICE_PATTERN
            .captures(&cleaned)
            .ok_or_else(|| PriceError::Invalid(input.to_string()))?;

        let whole: i64 = captures[1]
            .parse()
            .map_err(|_| PriceError::Invalid(input.to_string()))?;
        let fraction = match captures.get(2) {
            Some(digits) if digits.as_str().len() == 1 => digits.as_str().parse::<i64>().unwrap_or(0) * 10,
            Some(digits) => digits.as_str().parse::<i64>().unwrap_or(0),
            None => 0,
        };

        whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|minor| minor.checked_add(fraction))
            .map(Self)
            .ok_or_else(|| PriceError::Invalid(input.to_string()))
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / MINOR_PER_MAJOR;
        let fraction = (self.0 % MINOR_PER_MAJOR).abs();
        if fraction == 0 {
            write!(f, "₹{}", whole)
        } else {
            write!(f, "₹{}.{:02}", whole, fraction)
        }
    }
}

impl std::str::FromStr for Money {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Written as a plain decimal number, the canonical wire and storage form.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % MINOR_PER_MAJOR == 0 {
            serializer.serialize_i64(self.0 / MINOR_PER_MAJOR)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Integer(i64),
            Decimal(f64),
            Display(String),
        }

        match RawPrice::deserialize(deserializer)? {
            RawPrice::Integer(major) if major >= 0 => Ok(Money::from_major(major)),
            RawPrice::Integer(major) => Err(serde::de::Error::custom(format!(
                "negative price: {}",
                major
            ))),
            RawPrice::Decimal(amount) => Money::from_decimal(amount).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid price: {}", amount))
            }),
            RawPrice::Display(text) => Money::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}
