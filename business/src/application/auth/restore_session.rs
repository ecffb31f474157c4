use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::AuthSession;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::state::AuthState;
use crate::domain::auth::use_cases::restore_session::RestoreSessionUseCase;
use crate::domain::logger::Logger;

pub struct RestoreSessionUseCaseImpl {
    pub sessions: Arc<dyn SessionRepository>,
    pub state: Arc<AuthState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestoreSessionUseCase for RestoreSessionUseCaseImpl {
    async fn execute(&self) -> Option<AuthSession> {
        match self.sessions.load().await {
            Ok(Some(session)) => {
                if self.state.restore(session.clone()) {
                    self.logger
                        .debug(&format!("Restored session for {}", session.user_id));
                }
                Some(session)
            }
            Ok(None) => None,
            Err(err) => {
                self.logger
                    .warn(&format!("Stored session could not be read: {}", err));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::AuthToken;
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

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

    fn session() -> AuthSession {
        AuthSession {
            token: AuthToken::new("persisted"),
            user_id: UserId::new("u-9"),
        }
    }

    #[tokio::test]
    async fn should_restore_stored_session_into_state() {
        let mut mock_sessions = MockSessionRepo::new();
        mock_sessions.expect_load().returning(|| Ok(Some(session())));
        let state = Arc::new(AuthState::new());

        let use_case = RestoreSessionUseCaseImpl {
            sessions: Arc::new(mock_sessions),
            state: state.clone(),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await, Some(session()));
        assert!(state.is_authenticated());
        assert_eq!(state.epoch(), 0);
    }

    #[tokio::test]
    async fn should_stay_anonymous_when_store_unreadable() {
        let mut mock_sessions = MockSessionRepo::new();
        mock_sessions
            .expect_load()
            .returning(|| Err(StorageError::Malformed));
        let state = Arc::new(AuthState::new());

        let use_case = RestoreSessionUseCaseImpl {
            sessions: Arc::new(mock_sessions),
            state: state.clone(),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.is_none());
        assert!(!state.is_authenticated());
    }
}
