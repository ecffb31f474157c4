use std::env;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = ".zodiac-brew/store.json";

/// Where the local persistent store lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// `path_override` (the `--store` flag) wins over `ZODIAC_STORE_PATH`.
    pub fn from_env(path_override: Option<PathBuf>) -> Self {
        let path = path_override
            .or_else(|| env::var("ZODIAC_STORE_PATH").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
        Self { path }
    }
}
