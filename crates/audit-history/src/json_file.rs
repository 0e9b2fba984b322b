//! JSON-file history store: one file holding the whole serialized list.

use audit_types::{HistoryItem, HistoryStore, HistoryStoreError, HISTORY_CAP};
use std::path::{Path, PathBuf};

/// File-backed implementation of [`HistoryStore`] (persists across restarts).
///
/// The entire list lives in a single JSON array that is rewritten wholesale
/// on every mutation; a missing file reads as an empty list. Writers are
/// serialized with an internal mutex, so concurrent saves are last-write-wins
/// rather than interleaved.
pub struct JsonFileHistoryStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<HistoryItem>, HistoryStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryStoreError::Other(e.to_string())),
        };
        serde_json::from_str(&content).map_err(|e| HistoryStoreError::Other(e.to_string()))
    }

    async fn write_all(&self, items: &[HistoryItem]) -> Result<(), HistoryStoreError> {
        let json =
            serde_json::to_string(items).map_err(|e| HistoryStoreError::Other(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| HistoryStoreError::Other(e.to_string()))
    }
}

#[async_trait::async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn get(&self) -> Result<Vec<HistoryItem>, HistoryStoreError> {
        self.read_all().await
    }

    async fn save(&self, item: HistoryItem) -> Result<(), HistoryStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read_all().await?;
        items.insert(0, item);
        items.truncate(HISTORY_CAP);
        self.write_all(&items).await
    }

    async fn delete(&self, id: &str) -> Result<bool, HistoryStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read_all().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() < before;
        if removed {
            self.write_all(&items).await?;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HistoryStoreError::Other(e.to_string())),
        }
    }
}
