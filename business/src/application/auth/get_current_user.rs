use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::model::UserProfile;
use crate::domain::auth::repository::SessionRepository;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::state::AuthState;
use crate::domain::auth::use_cases::get_current_user::GetCurrentUserUseCase;
use crate::domain::logger::Logger;

/// Fetches the profile of the stored session.
///
/// Returns `None` without touching the network when no session is stored
/// or when this process already signed out. A failed fetch keeps the stored session and also returns `None`. A result
/// that arrives after a sign-in or sign-out is discarded.
pub struct GetCurrentUserUseCaseImpl {
    pub service: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub state: Arc<AuthState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    async fn execute(&self) -> Option<UserProfile> {
        let session = match self.sessions.load().await {
            Ok(Some(session)) => session,
            Ok(None) => return None,
            Err(err) => {
                self.logger
                    .warn(&format!("Stored session could not be read: {}", err));
                return None;
            }
        };

        if !self.state.is_authenticated() && !self.state.restore(session.clone()) {
            self.logger
                .debug("Signed out in this process, ignoring the stored session");
            return None;
        }
        let epoch = self.state.epoch();

        let user = match self
            .service
            .fetch_user(&session.user_id, Some(session.token.clone()))
            .await
        {
            Ok(user) => user,
            Err(err) => {
                self.logger.warn(&format!(
                    "Error fetching user {}: {:?}",
                    session.user_id, err
                ));
                return None;
            }
        };

        if !self.state.apply_user(epoch, session, user.clone()) {
            self.logger
                .debug("Discarding profile fetched for a previous session");
            return None;
        }
        Some(user)
    }
}
