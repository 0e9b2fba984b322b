//! SQLite-backed history store.

use audit_types::{HistoryItem, HistoryStore, HistoryStoreError, HISTORY_CAP};
use std::path::Path;

/// SQLite implementation of [`HistoryStore`].
///
/// One row per item with the full JSON in a TEXT column; insertion order via
/// rowid gives most-recent-first reads and oldest-first eviction.
pub struct SqliteHistoryStore {
    conn: std::sync::Mutex<rusqlite::Connection>,
}

impl SqliteHistoryStore {
    /// Open (or create) the store at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, HistoryStoreError> {
        let conn = rusqlite::Connection::open(path)
            .map_err(|e| HistoryStoreError::Other(e.to_string()))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id TEXT PRIMARY KEY,
                item TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| HistoryStoreError::Other(e.to_string()))?;

        Ok(Self {
            conn: std::sync::Mutex::new(conn),
        })
    }

    fn with_conn<T, F>(&self, f: F) -> Result<T, HistoryStoreError>
    where
        F: FnOnce(&rusqlite::Connection) -> Result<T, rusqlite::Error>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| HistoryStoreError::Other(format!("failed to acquire lock: {}", e)))?;
        f(&conn).map_err(|e| HistoryStoreError::Other(e.to_string()))
    }
}

#[async_trait::async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn get(&self) -> Result<Vec<HistoryItem>, HistoryStoreError> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT item FROM history ORDER BY rowid DESC")?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })?;

        let mut out = Vec::with_capacity(rows.len());
        for raw in rows {
            let item: HistoryItem = serde_json::from_str(&raw)
                .map_err(|e| HistoryStoreError::Other(e.to_string()))?;
            out.push(item);
        }
        Ok(out)
    }

    async fn save(&self, item: HistoryItem) -> Result<(), HistoryStoreError> {
        let id = item.id.clone();
        let json =
            serde_json::to_string(&item).map_err(|e| HistoryStoreError::Other(e.to_string()))?;

        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            tx.execute(
                "INSERT OR REPLACE INTO history (id, item) VALUES (?1, ?2)",
                rusqlite::params![id, json],
            )?;
            tx.execute(
                "DELETE FROM history WHERE rowid NOT IN (SELECT rowid FROM history ORDER BY rowid DESC LIMIT ?1)",
                rusqlite::params![HISTORY_CAP as i64],
            )?;
            tx.commit()
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, HistoryStoreError> {
        let id = id.to_string();
        let changed = self.with_conn(|conn| {
            conn.execute("DELETE FROM history WHERE id = ?1", rusqlite::params![id])
        })?;
        Ok(changed > 0)
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.with_conn(|conn| conn.execute("DELETE FROM history", []))?;
        Ok(())
    }
}
