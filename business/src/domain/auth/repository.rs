use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::AuthSession;

/// Port over the `token` and `userId` keys of the local persistent store.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// `None` unless both the token and the user id are stored.
    async fn load(&self) -> Result<Option<AuthSession>, StorageError>;
    async fn save(&self, session: &AuthSession) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
