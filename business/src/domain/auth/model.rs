use chrono::NaiveDate;

use crate::domain::catalog::mood::Mood;
use crate::domain::order::model::PlacedOrder;
use crate::domain::shared::value_objects::UserId;

/// Opaque bearer token issued by the remote API.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Authenticated identity attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: AuthToken,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub previous_orders: Vec<PlacedOrder>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated registration payload sent to `/auth/register`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub mood: Option<Mood>,
}

/// Successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub session: AuthSession,
    pub user: UserProfile,
}
