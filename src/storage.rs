use crate::errors::AppError;
use crate::models::ProfileMap;
use crate::profiles::ProfileStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tracing::{error, warn};

pub const PROFILES_KEY: &str = "office-tracker:profiles";
pub const ACTIVE_KEY: &str = "office-tracker:active";

/// A local key-value store holding opaque blobs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;
    async fn set(&self, key: &str, value: Vec<u8>) -> io::Result<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        let blobs = self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(blobs.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> io::Result<()> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        blobs.insert(key.to_string(), value);
        Ok(())
    }
}

/// Loads the profile store. Unreadable or unparseable blobs are logged and
/// treated as empty.
pub async fn load_profiles(store: &dyn BlobStore) -> ProfileStore {
    let profiles: ProfileMap = read_json(store, PROFILES_KEY).await.unwrap_or_default();
    let active: Option<String> = read_json(store, ACTIVE_KEY).await.flatten();
    ProfileStore::from_parts(profiles, active)
}

async fn read_json<T: serde::de::DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    match store.get(key).await {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                error!("failed to parse {key}: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("failed to read {key}: {err}");
            None
        }
    }
}

pub async fn persist_profiles(store: &dyn BlobStore, profiles: &ProfileStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(profiles.profiles()).map_err(AppError::internal)?;
    store.set(PROFILES_KEY, payload).await?;
    let active = serde_json::to_vec(&profiles.active_id()).map_err(AppError::internal)?;
    store.set(ACTIVE_KEY, active).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileSettings;

    fn unique_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("office_tracker_storage_{}_{}", std::process::id(), nanos))
    }

    fn populated() -> ProfileStore {
        let mut profiles = ProfileStore::default();
        profiles
            .create(ProfileSettings {
                name: "Kai".to_string(),
                join_date: "2025-06-02".to_string(),
                days_per_week: 2,
            })
            .unwrap();
        profiles
    }

    #[tokio::test]
    async fn memory_store_round_trips_profiles() {
        let store = MemoryStore::default();
        let profiles = populated();
        persist_profiles(&store, &profiles).await.unwrap();
        assert_eq!(load_profiles(&store).await, profiles);
    }

    #[tokio::test]
    async fn file_store_round_trips_profiles() {
        let dir = unique_dir();
        let store = FileStore::new(&dir);
        let profiles = populated();
        persist_profiles(&store, &profiles).await.unwrap();

        assert!(dir.join("office-tracker_profiles.json").exists());
        assert_eq!(load_profiles(&store).await, profiles);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn missing_store_loads_empty() {
        let store = FileStore::new(unique_dir());
        assert_eq!(load_profiles(&store).await, ProfileStore::default());
    }

    #[tokio::test]
    async fn corrupt_blob_loads_empty() {
        let store = MemoryStore::default();
        store.set(PROFILES_KEY, b"{oops".to_vec()).await.unwrap();
        store.set(ACTIVE_KEY, b"\"gone\"".to_vec()).await.unwrap();
        let loaded = load_profiles(&store).await;
        assert!(loaded.profiles().is_empty());
        assert_eq!(loaded.active_id(), None);
    }
}
