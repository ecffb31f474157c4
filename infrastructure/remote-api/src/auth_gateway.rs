use async_trait::async_trait;

use business::domain::auth::model::{
    AuthResponse, AuthToken, Credentials, RegistrationRequest, UserProfile,
};
use business::domain::auth::services::AuthService;
use business::domain::errors::ApiError;
use business::domain::shared::value_objects::UserId;

use crate::client::ApiClient;
use crate::dto::{AuthDataDto, Envelope, LoginBody, RegisterBody, UserDto};

pub struct AuthGatewayHttp {
    client: ApiClient,
}

impl AuthGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthGatewayHttp {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .client
            .post(self.client.url(&["auth", "login"])?)
            .json(&LoginBody::from(credentials));

        let envelope: Envelope<AuthDataDto> = self.client.send(request).await?;
        Ok(envelope.data.into_domain())
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        let request = self
            .client
            .client
            .post(self.client.url(&["auth", "register"])?)
            .json(&RegisterBody::from(request));

        let envelope: Envelope<AuthDataDto> = self.client.send(request).await?;
        Ok(envelope.data.into_domain())
    }

    async fn fetch_user(
        &self,
        user_id: &UserId,
        token: Option<AuthToken>,
    ) -> Result<UserProfile, ApiError> {
        let request = self
            .client
            .client
            .get(self.client.url(&["users", user_id.as_str()])?);
        let request = self.client.authorized(request, token.as_ref());

        let envelope: Envelope<UserDto> = self.client.send(request).await?;
        Ok(envelope.data.into_domain())
    }
}
