use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::UserProfile;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::state::AuthState;
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub service: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub state: Arc<AuthState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<UserProfile, AuthError> {
        let request = params
            .form
            .validate(Utc::now().date_naive())
            .inspect_err(|err| {
                self.logger
                    .debug(&format!("Registration form rejected: {}", err));
            })?;

        self.logger
            .info(&format!("Registering account for {}", request.email));

        let response = self.service.register(&request).await.map_err(|err| {
            self.logger
                .warn(&format!("Registration rejected: {:?}", err));
            AuthError::from_api(err, "Registration failed")
        })?;

        self.sessions.save(&response.session).await.map_err(|err| {
            self.logger
                .error(&format!("Could not persist session: {}", err));
            AuthError::Storage(err)
        })?;

        self.state
            .sign_in(response.session, Some(response.user.clone()));
        self.logger
            .info(&format!("Registered user {}", response.user.id));
        Ok(response.user)
    }
}
