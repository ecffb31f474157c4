use std::env;
use std::time::Duration;

use url::Url;

use super::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote storefront API settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - ZODIAC_API_URL: API base url (default: "http://localhost:3000/api")
    /// - ZODIAC_API_TIMEOUT_SECS: request timeout in seconds (default: 30)
    ///
    /// `url_override` (the `--api-url` flag) wins over the environment.
    pub fn from_env(url_override: Option<&str>) -> Result<Self, ConfigError> {
        let raw_url = match url_override {
            Some(url) => url.to_string(),
            None => env::var("ZODIAC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };
        let raw_timeout = env::var("ZODIAC_API_TIMEOUT_SECS").ok();
        Self::parse(&raw_url, raw_timeout.as_deref())
    }

    pub fn parse(raw_url: &str, raw_timeout: Option<&str>) -> Result<Self, ConfigError> {
        let base_url =
            Url::parse(raw_url).map_err(|_| ConfigError::InvalidApiUrl(raw_url.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl(raw_url.to_string()));
        }

        let timeout_secs = match raw_timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Base url without trailing slash, ready for path joins.
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_without_timeout() {
        let config = ApiConfig::parse(DEFAULT_API_URL, None).unwrap();

        assert_eq!(config.base_url_str(), "http://localhost:3000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_reject_non_http_url() {
        let result = ApiConfig::parse("ftp://example.com", None);
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl(_))));
    }

    #[test]
    fn should_reject_garbage_timeout() {
        let result = ApiConfig::parse(DEFAULT_API_URL, Some("soon"));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));

        let result = ApiConfig::parse(DEFAULT_API_URL, Some("0"));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
    }

    #[test]
    fn should_take_custom_timeout() {
        let config = ApiConfig::parse("https://brew.example.com/api/", Some("5")).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url_str(), "https://brew.example.com/api");
    }
}
