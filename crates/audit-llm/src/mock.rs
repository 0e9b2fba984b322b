//! Mock LLM client for tests: canned responses, no network.

use async_trait::async_trait;
use audit_types::{LlmClient, LlmError};
use std::sync::atomic::{AtomicUsize, Ordering};

enum Mode {
    Text(String),
    Fail(String),
}

/// Mock client returning a fixed response and counting invocations.
pub struct MockLlmClient {
    mode: Mode,
    calls: AtomicUsize,
}

impl MockLlmClient {
    /// Respond with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            mode: Mode::Text(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Respond with a canned, fully-populated report JSON for the given URL.
    pub fn with_canned_report(url: &str) -> Self {
        Self::with_text(canned_report_json(url))
    }

    /// Fail every call with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            mode: Mode::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            Mode::Text(text) => Ok(text.clone()),
            Mode::Fail(message) => Err(LlmError::Api(message.clone())),
        }
    }
}

/// Report JSON in the exact shape the prompt instructs the model to emit.
pub fn canned_report_json(url: &str) -> String {
    serde_json::json!({
        "success": true,
        "message": "QA Report Generated Successfully",
        "report": format!("# QA Report for {}\n\n## Executive Summary\nLooks healthy.", url),
        "executiveSummary": {
            "overallScore": 82,
            "healthGrade": "B",
            "riskLevel": "Medium",
            "auditDate": "2026-08-30T00:00:00Z",
            "issueBreakdown": {"high": 1, "medium": 2, "low": 3}
        },
        "lighthouseScores": {
            "performance": {"score": 74, "label": "Good"},
            "accessibility": {"score": 91, "label": "Excellent"},
            "seo": {"score": 58, "label": "Poor"},
            "bestPractices": {"score": 80, "label": "Good"}
        },
        "issues": [
            {
                "type": "Broken link",
                "severity": "High",
                "description": "Footer link returns 404.",
                "recommendation": "Fix or remove the link.",
                "businessImpact": "Users hit dead ends."
            }
        ]
    })
    .to_string()
}
