use async_trait::async_trait;

use crate::domain::auth::model::AuthSession;

/// Loads the stored session into memory without contacting the API.
#[async_trait]
pub trait RestoreSessionUseCase: Send + Sync {
    async fn execute(&self) -> Option<AuthSession>;
}
