//! JSON file store
//!
//! Single-file persistence with a write-temp-then-rename save, so a crash
//! mid-write never leaves a half-written cache behind.

use std::path::PathBuf;

use crate::cache::{CacheError, FriendsStore};
use crate::domain::Friend;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the platform data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("paydash").join("friends.json"))
    }

    fn write(&self, friends: &[Friend]) -> Result<(), CacheError> {
        let payload =
            serde_json::to_vec(friends).map_err(|e| CacheError::Corrupt(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FriendsStore for JsonFileStore {
    fn save(&self, friends: &[Friend]) {
        if let Err(e) = self.write(friends) {
            tracing::warn!(path = %self.path.display(), error = %e, "friends cache save failed");
        }
    }

    async fn load(&self) -> Result<Vec<Friend>, CacheError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(CacheError::Empty),
            Err(e) => return Err(CacheError::Io(e)),
        };
        serde_json::from_slice(&raw).map_err(|e| CacheError::Corrupt(e.to_string()))
    }
}
