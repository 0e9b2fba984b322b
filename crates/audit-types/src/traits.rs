//! Traits for the model client, report generation, and history storage.

use crate::{AuditReport, HistoryItem, WebsiteType};
use async_trait::async_trait;

/// Maximum number of history entries kept by any [`HistoryStore`].
pub const HISTORY_CAP: usize = 50;

/// Text generation client (Gemini or compatible).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete a single prompt, returning the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Produces a validated audit report for a URL and optional category.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate_report(
        &self,
        url: &str,
        website_type: Option<WebsiteType>,
    ) -> Result<AuditReport, ReportError>;
}

/// Bounded, most-recent-first audit history.
///
/// All operations are whole-list read-modify-write; there is no partial
/// update and concurrent writers are last-write-wins.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// All stored items, most recent first. Empty when nothing is stored.
    async fn get(&self) -> Result<Vec<HistoryItem>, HistoryStoreError>;

    /// Prepend an item, evicting the oldest beyond [`HISTORY_CAP`].
    async fn save(&self, item: HistoryItem) -> Result<(), HistoryStoreError>;

    /// Remove the item with the exact id. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, HistoryStoreError>;

    /// Remove every stored item.
    async fn clear(&self) -> Result<(), HistoryStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("llm error: {0}")]
    Other(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("empty response")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("llm: {0}")]
    Llm(#[from] LlmError),
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("history store error: {0}")]
    Other(String),
}
