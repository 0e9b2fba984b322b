//! Request and response DTOs for the audit API.

use serde::{Deserialize, Serialize};

/// Website category used to tailor the audit prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteType {
    Portfolio,
    Business,
    Ecommerce,
    Blog,
    Educational,
    News,
    Saas,
}

impl WebsiteType {
    pub fn as_str(self) -> &'static str {
        match self {
            WebsiteType::Portfolio => "portfolio",
            WebsiteType::Business => "business",
            WebsiteType::Ecommerce => "ecommerce",
            WebsiteType::Blog => "blog",
            WebsiteType::Educational => "educational",
            WebsiteType::News => "news",
            WebsiteType::Saas => "saas",
        }
    }

    /// All known categories, in wire order.
    pub const ALL: [WebsiteType; 7] = [
        WebsiteType::Portfolio,
        WebsiteType::Business,
        WebsiteType::Ecommerce,
        WebsiteType::Blog,
        WebsiteType::Educational,
        WebsiteType::News,
        WebsiteType::Saas,
    ];
}

impl std::fmt::Display for WebsiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit request body: `{url, type?}`.
///
/// `url` is optional at the serde level so a request missing the field
/// reaches the handler and gets a 400 rather than a framework decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub website_type: Option<WebsiteType>,
}

/// Severity / risk classification used by summaries and issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// Qualitative label attached to a metric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Poor,
    Good,
    Excellent,
}

/// Issue counts by severity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueBreakdown {
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

/// High-level verdict for one audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    /// Overall score in 0-100.
    pub overall_score: f64,
    /// Letter grade A-F.
    pub health_grade: String,
    pub risk_level: RiskLevel,
    /// ISO date string as emitted by the model.
    pub audit_date: String,
    pub issue_breakdown: IssueBreakdown,
}

/// One Lighthouse-style metric: numeric score plus qualitative label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    pub score: f64,
    pub label: ScoreLabel,
}

/// Fabricated Lighthouse-style score set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseScores {
    pub performance: MetricScore,
    pub accessibility: MetricScore,
    pub seo: MetricScore,
    pub best_practices: MetricScore,
}

/// One finding from the audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: RiskLevel,
    pub description: String,
    pub recommendation: String,
    pub business_impact: String,
}

/// Full audit result: Markdown report plus optional structured fields.
///
/// Doubles as the `/api/generate` response body and as the JSON shape the
/// model is instructed to produce, so a successful model response is
/// returned to the caller verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<ExecutiveSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighthouse_scores: Option<LighthouseScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditReport {
    /// Failure envelope with no report payload.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: String::new(),
            report: None,
            executive_summary: None,
            lighthouse_scores: None,
            issues: None,
            error: Some(error.into()),
        }
    }
}

/// One persisted past audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub website_type: Option<WebsiteType>,
    /// RFC 3339 timestamp of when the audit was recorded.
    pub date: String,
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub response: AuditReport,
}

impl HistoryItem {
    /// Build a history entry from a report that carries an executive summary.
    ///
    /// Returns `None` when the report has no summary; such reports are not
    /// recorded. Ids are UUID v4, so rapid successive audits never collide.
    pub fn from_report(
        url: impl Into<String>,
        website_type: Option<WebsiteType>,
        report: AuditReport,
    ) -> Option<Self> {
        let summary = report.executive_summary.as_ref()?;
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
            website_type,
            date: chrono::Utc::now().to_rfc3339(),
            overall_score: summary.overall_score,
            risk_level: summary.risk_level,
            response: report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_type_round_trips_lowercase() {
        for t in WebsiteType::ALL {
            let s = serde_json::to_string(&t).unwrap();
            assert_eq!(s, format!("\"{}\"", t.as_str()));
            let back: WebsiteType = serde_json::from_str(&s).unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn generate_request_tolerates_missing_fields() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
        assert!(req.website_type.is_none());

        let req: GenerateRequest =
            serde_json::from_str(r#"{"url":"example.com","type":"saas"}"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("example.com"));
        assert_eq!(req.website_type, Some(WebsiteType::Saas));
    }

    #[test]
    fn audit_report_parses_model_shape() {
        let raw = r##"{
            "success": true,
            "message": "QA Report Generated Successfully",
            "report": "# Report",
            "executiveSummary": {
                "overallScore": 82,
                "healthGrade": "B",
                "riskLevel": "Medium",
                "auditDate": "2026-08-30T00:00:00Z",
                "issueBreakdown": {"high": 1, "medium": 2, "low": 3}
            },
            "lighthouseScores": {
                "performance": {"score": 75, "label": "Good"},
                "accessibility": {"score": 90, "label": "Excellent"},
                "seo": {"score": 60, "label": "Poor"},
                "bestPractices": {"score": 85, "label": "Good"}
            },
            "issues": [
                {"type": "Broken link", "severity": "High",
                 "description": "d", "recommendation": "r", "businessImpact": "b"}
            ]
        }"##;
        let report: AuditReport = serde_json::from_str(raw).unwrap();
        assert!(report.success);
        let summary = report.executive_summary.as_ref().unwrap();
        assert_eq!(summary.risk_level, RiskLevel::Medium);
        assert_eq!(summary.issue_breakdown.medium, 2);
        let scores = report.lighthouse_scores.as_ref().unwrap();
        assert_eq!(scores.best_practices.label, ScoreLabel::Good);
        assert_eq!(report.issues.as_ref().unwrap()[0].kind, "Broken link");
    }

    #[test]
    fn history_item_requires_executive_summary() {
        let bare = AuditReport {
            success: true,
            message: "ok".into(),
            report: Some("# Report".into()),
            executive_summary: None,
            lighthouse_scores: None,
            issues: None,
            error: None,
        };
        assert!(HistoryItem::from_report("example.com", None, bare.clone()).is_none());

        let mut with_summary = bare;
        with_summary.executive_summary = Some(ExecutiveSummary {
            overall_score: 70.0,
            health_grade: "C".into(),
            risk_level: RiskLevel::Low,
            audit_date: "2026-08-30".into(),
            issue_breakdown: IssueBreakdown::default(),
        });
        let item =
            HistoryItem::from_report("example.com", Some(WebsiteType::Blog), with_summary).unwrap();
        assert_eq!(item.overall_score, 70.0);
        assert_eq!(item.risk_level, RiskLevel::Low);
        assert!(!item.id.is_empty());
    }
}
