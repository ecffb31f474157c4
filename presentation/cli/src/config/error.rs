#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_api_url: {0}")]
    InvalidApiUrl(String),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
}
