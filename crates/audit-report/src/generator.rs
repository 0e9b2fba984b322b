//! Report generator: one model call, then schema validation.

use crate::prompt::build_prompt;
use async_trait::async_trait;
use audit_types::{AuditReport, LlmClient, ReportError, ReportGenerator, WebsiteType};
use std::sync::Arc;

/// Generates audit reports through an [`LlmClient`].
///
/// Exactly one outbound call per request; no retries and no timeout layer.
pub struct LlmReportGenerator {
    llm: Arc<dyn LlmClient>,
}

impl LlmReportGenerator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Validate raw model text into a typed report.
    ///
    /// Tolerates prose or code fences around the JSON object; anything that
    /// does not deserialize into the report shape (or lacks a non-empty
    /// `report` field) is a malformed response, never a raw parse panic.
    fn parse_report(text: &str) -> Result<AuditReport, ReportError> {
        let json_str = extract_json_from_text(text).ok_or_else(|| {
            ReportError::MalformedResponse("no JSON object found in model output".to_string())
        })?;

        let report: AuditReport = serde_json::from_str(json_str)
            .map_err(|e| ReportError::MalformedResponse(format!("JSON parse error: {}", e)))?;

        match report.report.as_deref() {
            Some(body) if !body.trim().is_empty() => Ok(report),
            _ => Err(ReportError::MalformedResponse(
                "model output has no report text".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ReportGenerator for LlmReportGenerator {
    async fn generate_report(
        &self,
        url: &str,
        website_type: Option<WebsiteType>,
    ) -> Result<AuditReport, ReportError> {
        let prompt = build_prompt(url, website_type);
        let text = self.llm.generate(&prompt).await.map_err(|e| {
            tracing::error!(url, error = %e, "model call failed");
            e
        })?;

        let report = Self::parse_report(&text).map_err(|e| {
            tracing::error!(url, error = %e, "model returned unusable output");
            e
        })?;
        tracing::info!(url, category = ?website_type, "report generated");
        Ok(report)
    }
}

/// Slice out the outermost JSON object from model text.
fn extract_json_from_text(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}
