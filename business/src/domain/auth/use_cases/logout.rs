use async_trait::async_trait;

/// Signing out always succeeds; a store that cannot be cleared is only logged.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self);
}
