use async_trait::async_trait;

use crate::domain::auth::model::UserProfile;

/// `None` means "no user": no stored session, a failed fetch, or a result
/// that went stale because the session changed while it was in flight.
#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self) -> Option<UserProfile>;
}
