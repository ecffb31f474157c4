use std::path::PathBuf;

use super::error::ConfigError;
use super::api_config::ApiConfig;
use super::store_config::StoreConfig;

pub struct AppConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn load(api_url: Option<&str>, store_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::from_env(api_url)?,
            store: StoreConfig::from_env(store_path),
        })
    }
}
