use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::model::{AuthSession, AuthToken};
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::StorageError;
use business::domain::shared::value_objects::UserId;

use crate::store::{LocalStore, StorageKey};

/// Keeps the session as two raw string entries, `token` and `userId`.
pub struct SessionRepositoryLocal {
    store: Arc<dyn LocalStore>,
}

impl SessionRepositoryLocal {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryLocal {
    /// A session exists only when both entries are present and non-empty.
    async fn load(&self) -> Result<Option<AuthSession>, StorageError> {
        let token = self.store.get(StorageKey::Token).await?;
        let user_id = self.store.get(StorageKey::UserId).await?;

        Ok(match (token, user_id) {
            (Some(token), Some(user_id)) if !token.is_empty() && !user_id.is_empty() => {
                Some(AuthSession {
                    token: AuthToken::new(token),
                    user_id: UserId::new(user_id),
                })
            }
            _ => None,
        })
    }

    async fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        self.store
            .set(StorageKey::Token, session.token.as_str().to_string())
            .await?;
        self.store
            .set(StorageKey::UserId, session.user_id.as_str().to_string())
            .await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let token = self.store.remove(StorageKey::Token).await;
        let user_id = self.store.remove(StorageKey::UserId).await;
        token.and(user_id)
    }
}
