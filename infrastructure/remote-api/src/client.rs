use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use business::domain::auth::model::AuthToken;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::ApiError;

use crate::dto::ErrorBody;

/// Shared HTTP client for the Zodiac Brew REST API.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
    sessions: Option<Arc<dyn SessionRepository>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions: None,
        }
    }

    /// Lets requests without an explicit token fall back to the stored session.
    pub fn with_sessions(mut self, sessions: Arc<dyn SessionRepository>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Talks to the given host directly, ignoring proxy settings from the environment.
    #[cfg(test)]
    pub(crate) fn without_proxy(mut self) -> Self {
        self.client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        self
    }

    /// Appends `segments` to the base url. Each segment is percent-encoded,
    /// so an id containing `/` or `?` stays a single path segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| ApiError::network(format!("invalid API url {}: {}", self.base_url, err)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::network(format!("API url {} cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Adds the bearer header when a token is known.
    pub fn authorized(&self, request: RequestBuilder, token: Option<&AuthToken>) -> RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", token.bearer()),
            None => request,
        }
    }

    /// Adds the bearer header of the stored session, if there is one.
    /// A store that cannot be read leaves the request anonymous.
    pub async fn authorized_by_session(&self, request: RequestBuilder) -> RequestBuilder {
        let Some(sessions) = &self.sessions else {
            return request;
        };
        match sessions.load().await {
            Ok(session) => self.authorized(request, session.as_ref().map(|session| &session.token)),
            Err(err) => {
                tracing::warn!(target: "zodiac_brew", "Stored session could not be read: {}", err);
                request
            }
        }
    }

    /// Sends the request and decodes a success body as `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_text(request).await?;
        serde_json::from_str(&body).map_err(|err| ApiError::decode(err.to_string()))
    }

    /// Sends the request and returns the raw success body.
    pub async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;

        if !status.is_success() {
            tracing::debug!(target: "zodiac_brew", "API answered {}: {}", status, body);
            return Err(status_error(status, &body));
        }
        Ok(body)
    }
}

/// Builds the error for a non-success answer, keeping the server's message.
pub fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message);
    ApiError::status(status.as_u16(), message)
}
