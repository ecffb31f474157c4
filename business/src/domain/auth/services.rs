use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::shared::value_objects::UserId;

use super::model::{AuthResponse, AuthToken, Credentials, RegistrationRequest, UserProfile};

/// Service port for the remote auth and user endpoints.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError>;
    async fn fetch_user(
        &self,
        user_id: &UserId,
        token: Option<AuthToken>,
    ) -> Result<UserProfile, ApiError>;
}
