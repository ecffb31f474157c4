use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{
    AuthResponse, AuthSession, AuthToken, Credentials, RegistrationRequest, UserProfile,
};
use business::domain::catalog::model::Coffee;
use business::domain::catalog::mood::Mood;
use business::domain::catalog::zodiac::ZodiacSign;
use business::domain::order::model::{OrderConfirmation, OrderDraft, OrderLine, PlacedOrder};
use business::domain::shared::value_objects::{CoffeeId, Money, UserId};

/// Every success body is wrapped as `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: CoffeeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Money,
    #[serde(default)]
    pub zodiac_signs: Vec<String>,
    #[serde(default)]
    pub moods: Vec<Mood>,
}

impl CoffeeDto {
    /// Unknown sign labels are dropped rather than failing the whole catalog.
    pub fn into_domain(self) -> Coffee {
        Coffee {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            zodiac_signs: self
                .zodiac_signs
                .iter()
                .filter_map(|label| label.parse::<ZodiacSign>().ok())
                .collect(),
            moods: self.moods,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub previous_orders: Vec<OrderDto>,
}

impl UserDto {
    pub fn into_domain(self) -> UserProfile {
        UserProfile {
            id: UserId::new(self.id),
            full_name: self.full_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            previous_orders: self
                .previous_orders
                .into_iter()
                .map(OrderDto::into_domain)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
    pub total_price: Money,
    #[serde(alias = "createdAt")]
    pub date: Option<String>,
}

impl OrderDto {
    pub fn into_domain(self) -> PlacedOrder {
        PlacedOrder {
            id: self.id,
            lines: self.items.into_iter().map(OrderItemDto::into_domain).collect(),
            total_price: self.total_price,
            created_at: self
                .date
                .as_deref()
                .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
                .map(|date| date.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    #[serde(rename = "coffee_id")]
    pub coffee_id: CoffeeId,
    pub qty: u32,
    pub unit_price: Money,
}

impl OrderItemDto {
    pub fn into_domain(self) -> OrderLine {
        OrderLine {
            coffee_id: self.coffee_id,
            quantity: self.qty,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthDataDto {
    pub token: String,
    pub user: UserDto,
}

impl AuthDataDto {
    pub fn into_domain(self) -> AuthResponse {
        let user = self.user.into_domain();
        AuthResponse {
            session: AuthSession {
                token: AuthToken::new(self.token),
                user_id: user.id.clone(),
            },
            user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginBody<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<&'a Mood>,
}

impl<'a> From<&'a RegistrationRequest> for RegisterBody<'a> {
    fn from(request: &'a RegistrationRequest) -> Self {
        Self {
            full_name: &request.full_name,
            email: &request.email,
            password: &request.password,
            date_of_birth: request.date_of_birth.format("%Y-%m-%d").to_string(),
            mood: request.mood.as_ref(),
        }
    }
}

/// Body of `POST /orders`: `{items: [{coffee_id, qty, unitPrice}], user_id, totalPrice}`.
#[derive(Debug, Serialize)]
pub struct OrderPayload<'a> {
    pub items: Vec<OrderItemPayload<'a>>,
    pub user_id: &'a str,
    #[serde(rename = "totalPrice")]
    pub total_price: Money,
}

#[derive(Debug, Serialize)]
pub struct OrderItemPayload<'a> {
    pub coffee_id: &'a CoffeeId,
    pub qty: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: Money,
}

impl<'a> From<&'a OrderDraft> for OrderPayload<'a> {
    fn from(draft: &'a OrderDraft) -> Self {
        Self {
            items: draft
                .lines
                .iter()
                .map(|line| OrderItemPayload {
                    coffee_id: &line.coffee_id,
                    qty: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            user_id: draft.user_id.as_str(),
            total_price: draft.total_price,
        }
    }
}

/// Reads the order id and message from an order response, looking in
/// `data` first and then at the top level.
pub fn confirmation_from_value(value: &serde_json::Value) -> OrderConfirmation {
    let data = value.get("data").unwrap_or(value);
    let id_of = |node: &serde_json::Value| {
        ["_id", "id"].iter().find_map(|key| match node.get(*key)? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
    };
    OrderConfirmation {
        order_id: id_of(data).or_else(|| id_of(value)),
        message: value
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_string),
    }
}
