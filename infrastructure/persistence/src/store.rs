use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use business::domain::errors::StorageError;
use business::domain::events::{EventBus, StoreEvent};

/// Keys of the local persistent store. The string forms are the on-disk names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum StorageKey {
    #[strum(serialize = "cart")]
    Cart,
    #[strum(serialize = "favorites")]
    Favorites,
    #[strum(serialize = "token")]
    Token,
    #[strum(serialize = "userId")]
    UserId,
}

/// String key/value store shared by the repositories. Last write wins.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError>;
    async fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}

#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("store.io_error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store.encoding_error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<FileStoreError> for StorageError {
    fn from(err: FileStoreError) -> Self {
        tracing::warn!(target: "zodiac_brew", "Local store failure: {}", err);
        match err {
            FileStoreError::Io(_) => StorageError::Unavailable,
            FileStoreError::Encoding(_) => StorageError::Malformed,
        }
    }
}

type Snapshot = BTreeMap<String, String>;

/// Local store backed by a single JSON object file (`{"cart": "...", "token": "..."}`).
///
/// Every operation re-reads the file, so writes made by another process are
/// picked up. Writes go to a sibling temp file that is renamed over the
/// original.
pub struct FileStore {
    path: PathBuf,
    /// Values as last written or synced by this process.
    last_seen: Mutex<Snapshot>,
}

impl FileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_seen = match read_snapshot(&path).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(
                    target: "zodiac_brew",
                    "Starting with an empty store, {} is unreadable: {}",
                    path.display(),
                    err
                );
                Snapshot::new()
            }
        };
        Self {
            path,
            last_seen: Mutex::new(last_seen),
        }
    }

    /// Compares the file with the values this process last saw and publishes
    /// one `StorageChanged` event per key that differs. Returns those keys.
    pub async fn sync_external_changes(&self, events: &EventBus) -> Result<Vec<String>, StorageError> {
        let mut last_seen = self.last_seen.lock().await;
        let current = read_snapshot(&self.path).await?;

        let keys: BTreeSet<&String> = last_seen.keys().chain(current.keys()).collect();
        let changed: Vec<String> = keys
            .into_iter()
            .filter(|key| last_seen.get(*key) != current.get(*key))
            .cloned()
            .collect();

        for key in &changed {
            events.publish(StoreEvent::StorageChanged { key: key.clone() });
        }
        *last_seen = current;
        Ok(changed)
    }

    async fn update(&self, key: StorageKey, value: Option<String>) -> Result<(), StorageError> {
        let mut last_seen = self.last_seen.lock().await;
        let mut snapshot = read_snapshot(&self.path).await?;

        match &value {
            Some(value) => snapshot.insert(key.to_string(), value.clone()),
            None => snapshot.remove(&key.to_string()),
        };
        write_snapshot(&self.path, &snapshot).await?;

        match value {
            Some(value) => last_seen.insert(key.to_string(), value),
            None => last_seen.remove(&key.to_string()),
        };
        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let snapshot = read_snapshot(&self.path).await?;
        Ok(snapshot.get(&key.to_string()).cloned())
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.update(key, Some(value)).await
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.update(key, None).await
    }
}

/// A missing file is an empty store. A file that is not a JSON object of
/// strings is treated the same way, so one corrupt write cannot lock the
/// user out.
async fn read_snapshot(path: &Path) -> Result<Snapshot, FileStoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Snapshot::new()),
        Err(err) => return Err(err.into()),
    };
    if raw.trim().is_empty() {
        return Ok(Snapshot::new());
    }
    match serde_json::from_str(&raw) {
        Ok(snapshot) => Ok(snapshot),
        Err(err) => {
            tracing::warn!(
                target: "zodiac_brew",
                "Ignoring malformed store file {}: {}",
                path.display(),
                err
            );
            Ok(Snapshot::new())
        }
    }
}

async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), FileStoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let encoded = serde_json::to_string_pretty(snapshot)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, encoded).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// In-process store, for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}
