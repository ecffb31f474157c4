use async_trait::async_trait;

use business::domain::catalog::model::Coffee;
use business::domain::catalog::services::CatalogService;
use business::domain::errors::ApiError;
use business::domain::shared::value_objects::CoffeeId;

use crate::client::ApiClient;
use crate::dto::{CoffeeDto, Envelope};

pub struct CatalogGatewayHttp {
    client: ApiClient,
}

impl CatalogGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for CatalogGatewayHttp {
    async fn list_coffees(&self) -> Result<Vec<Coffee>, ApiError> {
        let request = self.client.client.get(self.client.url(&["coffees"])?);
        let request = self.client.authorized_by_session(request).await;

        let envelope: Envelope<Vec<CoffeeDto>> = self.client.send(request).await?;
        Ok(envelope.data.into_iter().map(CoffeeDto::into_domain).collect())
    }

    async fn get_coffee(&self, id: &CoffeeId) -> Result<Coffee, ApiError> {
        let request = self
            .client
            .client
            .get(self.client.url(&["coffees", id.as_str()])?);
        let request = self.client.authorized_by_session(request).await;

        let envelope: Envelope<CoffeeDto> = self.client.send(request).await?;
        Ok(envelope.data.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use business::domain::auth::model::{AuthSession, AuthToken};
    use business::domain::auth::repository::SessionRepository;
    use business::domain::errors::StorageError;
    use business::domain::shared::value_objects::{Money, UserId};
    use std::sync::Arc;
    use std::time::Duration;

    const CATALOG: &str = r#"{"data":[{"_id":"c-1","name":"Leo Latte","price":180,"zodiacSigns":["Leo"],"moods":["happy"]}]}"#;

    struct StoredSession(Option<AuthSession>);

    #[async_trait]
    impl SessionRepository for StoredSession {
        async fn load(&self) -> Result<Option<AuthSession>, StorageError> {
            Ok(self.0.clone())
        }
        async fn save(&self, _session: &AuthSession) -> Result<(), StorageError> {
            Ok(())
        }
        async fn clear(&self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn gateway(base_url: &str, session: Option<AuthSession>) -> CatalogGatewayHttp {
        let client = ApiClient::new(base_url, Duration::from_secs(5))
            .without_proxy()
            .with_sessions(Arc::new(StoredSession(session)));
        CatalogGatewayHttp::new(client)
    }

    fn session() -> AuthSession {
        AuthSession {
            token: AuthToken::new("jwt-42"),
            user_id: UserId::new("u-42"),
        }
    }

    #[tokio::test]
    async fn should_send_stored_bearer_when_listing_coffees() {
        let (base_url, server) = serve_once(200, CATALOG).await;

        let coffees = gateway(&base_url, Some(session()))
            .list_coffees()
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.request_line(), "GET /api/coffees HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Bearer jwt-42"));
        assert_eq!(coffees.len(), 1);
        assert_eq!(coffees[0].price, Money::from_major(180));
    }

    #[tokio::test]
    async fn should_list_coffees_anonymously_without_session() {
        let (base_url, server) = serve_once(200, CATALOG).await;

        gateway(&base_url, None).list_coffees().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn should_encode_coffee_id_as_one_path_segment() {
        let (base_url, server) = serve_once(
            200,
            r#"{"data":{"_id":"a/b?c","name":"Odd Roast","price":200}}"#,
        )
        .await;

        let coffee = gateway(&base_url, Some(session()))
            .get_coffee(&CoffeeId::new("a/b?c"))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.request_line(), "GET /api/coffees/a%2Fb%3Fc HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Bearer jwt-42"));
        assert_eq!(coffee.id, CoffeeId::new("a/b?c"));
    }

    #[tokio::test]
    async fn should_report_missing_coffee_as_not_found() {
        let (base_url, _server) = serve_once(404, r#"{"message":"Coffee not found"}"#).await;

        let error = gateway(&base_url, None)
            .get_coffee(&CoffeeId::new("missing"))
            .await
            .unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(error.server_message(), Some("Coffee not found"));
    }
}
