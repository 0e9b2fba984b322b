//! In-memory history store (process lifetime only).

use audit_types::{HistoryItem, HistoryStore, HistoryStoreError, HISTORY_CAP};
use tokio::sync::RwLock;

/// In-memory implementation of [`HistoryStore`].
pub struct InMemoryHistoryStore {
    items: RwLock<Vec<HistoryItem>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn get(&self) -> Result<Vec<HistoryItem>, HistoryStoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn save(&self, item: HistoryItem) -> Result<(), HistoryStoreError> {
        let mut items = self.items.write().await;
        items.insert(0, item);
        items.truncate(HISTORY_CAP);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, HistoryStoreError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.items.write().await.clear();
        Ok(())
    }
}
