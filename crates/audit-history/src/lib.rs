//! History store backends: in-memory, JSON file, and optional SQLite.
//!
//! Every backend keeps at most [`HISTORY_CAP`] items, most recent first, and
//! mutates the list wholesale (last write wins).

mod json_file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use audit_types::{HistoryStore, HistoryStoreError, HISTORY_CAP};
pub use json_file::JsonFileHistoryStore;
pub use memory::InMemoryHistoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteHistoryStore;

#[cfg(test)]
pub(crate) mod test_util {
    use audit_types::{AuditReport, HistoryItem, RiskLevel, WebsiteType};

    /// History item with a fixed shape and the given id.
    pub fn item(id: &str) -> HistoryItem {
        HistoryItem {
            id: id.to_string(),
            url: format!("https://{}.example.com", id),
            website_type: Some(WebsiteType::Business),
            date: "2026-08-30T00:00:00+00:00".to_string(),
            overall_score: 75.0,
            risk_level: RiskLevel::Medium,
            response: AuditReport {
                success: true,
                message: "QA Report Generated Successfully".to_string(),
                report: Some("# Report".to_string()),
                executive_summary: None,
                lighthouse_scores: None,
                issues: None,
                error: None,
            },
        }
    }
}
