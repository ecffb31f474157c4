use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{Credentials, UserProfile};
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::state::AuthState;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::errors::ValidationError;
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub service: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub state: Arc<AuthState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<UserProfile, AuthError> {
        if params.email.trim().is_empty() || params.password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        let credentials = Credentials {
            email: params.email.trim().to_string(),
            password: params.password,
        };
        self.logger
            .info(&format!("Logging in as {}", credentials.email));

        let response = self.service.login(&credentials).await.map_err(|err| {
            self.logger.warn(&format!("Login rejected: {:?}", err));
            AuthError::from_api(err, "Login failed")
        })?;

        self.sessions.save(&response.session).await.map_err(|err| {
            self.logger
                .error(&format!("Could not persist session: {}", err));
            AuthError::Storage(err)
        })?;

        self.state
            .sign_in(response.session, Some(response.user.clone()));
        self.logger
            .info(&format!("Logged in user {}", response.user.id));
        Ok(response.user)
    }
}
