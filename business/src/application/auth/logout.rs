use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::state::AuthState;
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;

/// Forgets the session locally. Never fails.
pub struct LogoutUseCaseImpl {
    pub sessions: Arc<dyn SessionRepository>,
    pub state: Arc<AuthState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) {
        self.state.sign_out();
        if let Err(err) = self.sessions.clear().await {
            self.logger
                .warn(&format!("Stored session could not be removed: {}", err));
        }
        self.logger.info("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::auth::get_current_user::GetCurrentUserUseCaseImpl;
    use crate::domain::auth::model::{
        AuthResponse, AuthSession, AuthToken, Credentials, RegistrationRequest, UserProfile,
    };
    use crate::domain::auth::services::AuthService;
    use crate::domain::auth::use_cases::get_current_user::GetCurrentUserUseCase;
    use crate::domain::errors::{ApiError, StorageError};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Auth {}

        #[async_trait]
        impl AuthService for Auth {
            async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
            async fn register(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError>;
            async fn fetch_user(
                &self,
                user_id: &UserId,
                token: Option<AuthToken>,
            ) -> Result<UserProfile, ApiError>;
        }
    }

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn load(&self) -> Result<Option<AuthSession>, StorageError>;
            async fn save(&self, session: &AuthSession) -> Result<(), StorageError>;
            async fn clear(&self) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_session() -> AuthSession {
        AuthSession {
            token: AuthToken::new("t"),
            user_id: UserId::new("u1"),
        }
    }

    fn signed_in_state() -> Arc<AuthState> {
        let state = Arc::new(AuthState::new());
        state.sign_in(stored_session(), None);
        state
    }

    #[tokio::test]
    async fn should_clear_store_and_sign_out() {
        let mut mock_sessions = MockSessionRepo::new();
        mock_sessions.expect_clear().times(1).returning(|| Ok(()));
        let state = signed_in_state();

        let use_case = LogoutUseCaseImpl {
            sessions: Arc::new(mock_sessions),
            state: state.clone(),
            logger: mock_logger(),
        };

        use_case.execute().await;

        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn should_sign_out_even_when_store_fails() {
        let mut mock_sessions = MockSessionRepo::new();
        mock_sessions
            .expect_clear()
            .returning(|| Err(StorageError::Unavailable));
        mock_sessions
            .expect_load()
            .returning(|| Ok(Some(stored_session())));
        let sessions: Arc<dyn SessionRepository> = Arc::new(mock_sessions);
        let mut mock_auth = MockAuth::new();
        mock_auth.expect_fetch_user().never();
        let state = signed_in_state();

        let use_case = LogoutUseCaseImpl {
            sessions: sessions.clone(),
            state: state.clone(),
            logger: mock_logger(),
        };
        let current_user = GetCurrentUserUseCaseImpl {
            service: Arc::new(mock_auth),
            sessions,
            state: state.clone(),
            logger: mock_logger(),
        };

        use_case.execute().await;

        assert!(!state.is_authenticated());
        assert!(current_user.execute().await.is_none());
        assert!(!state.is_authenticated());
    }
}
