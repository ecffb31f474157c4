use async_trait::async_trait;

use business::domain::auth::model::AuthToken;
use business::domain::errors::ApiError;
use business::domain::order::model::{OrderConfirmation, OrderDraft};
use business::domain::order::services::OrderService;

use crate::client::ApiClient;
use crate::dto::{OrderPayload, confirmation_from_value};

pub struct OrderGatewayHttp {
    client: ApiClient,
}

impl OrderGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderService for OrderGatewayHttp {
    async fn submit_order(
        &self,
        draft: &OrderDraft,
        token: Option<AuthToken>,
    ) -> Result<OrderConfirmation, ApiError> {
        let request = self
            .client
            .client
            .post(self.client.url(&["orders"])?)
            .json(&OrderPayload::from(draft));
        let request = self.client.authorized(request, token.as_ref());

        // A success status is enough; the body is only mined for an id.
        let body = self.client.send_text(request).await?;
        let answer = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
        Ok(confirmation_from_value(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use business::domain::order::model::OrderLine;
    use business::domain::shared::value_objects::{CoffeeId, Money, UserId};
    use std::time::Duration;

    fn gateway(base_url: &str) -> OrderGatewayHttp {
        let client = ApiClient::new(base_url, Duration::from_secs(5)).without_proxy();
        OrderGatewayHttp::new(client)
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            user_id: UserId::new("u-1"),
            lines: vec![OrderLine {
                coffee_id: CoffeeId::new("c-1"),
                quantity: 2,
                unit_price: Money::from_major(180),
            }],
            total_price: Money::from_major(360),
        }
    }

    #[tokio::test]
    async fn should_post_order_with_bearer_token() {
        let (base_url, server) = serve_once(
            201,
            r#"{"data":{"_id":"o-9"},"message":"Order placed"}"#,
        )
        .await;

        let confirmation = gateway(&base_url)
            .submit_order(&draft(), Some(AuthToken::new("jwt-7")))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.request_line(), "POST /api/orders HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Bearer jwt-7"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "items": [{"coffee_id": "c-1", "qty": 2, "unitPrice": 180}],
                "user_id": "u-1",
                "totalPrice": 360
            })
        );
        assert_eq!(confirmation.order_id.as_deref(), Some("o-9"));
        assert_eq!(confirmation.message.as_deref(), Some("Order placed"));
    }

    #[tokio::test]
    async fn should_accept_success_with_empty_body() {
        let (base_url, _server) = serve_once(201, "").await;

        let confirmation = gateway(&base_url)
            .submit_order(&draft(), Some(AuthToken::new("jwt-7")))
            .await
            .unwrap();

        assert_eq!(
            confirmation,
            OrderConfirmation {
                order_id: None,
                message: None,
            }
        );
    }

    #[tokio::test]
    async fn should_fail_on_non_success_status() {
        let (base_url, _server) = serve_once(400, r#"{"message":"Cart is stale"}"#).await;

        let error = gateway(&base_url)
            .submit_order(&draft(), Some(AuthToken::new("jwt-7")))
            .await
            .unwrap_err();

        assert_eq!(error, ApiError::status(400, Some("Cart is stale".to_string())));
    }
}
