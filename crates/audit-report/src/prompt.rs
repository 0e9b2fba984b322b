//! Audit prompt template with category-specific checklists.

use audit_types::WebsiteType;

/// JSON structure the model must emit. Mirrors `AuditReport`.
const RESPONSE_STRUCTURE: &str = r#"You must return a JSON response that matches the following structure:
{
    "success": true,
    "message": "QA Report Generated Successfully",
    "report": "Detailed Markdown report here...",
    "executiveSummary": {
        "overallScore": number (0-100),
        "healthGrade": "A-F",
        "riskLevel": "High" | "Medium" | "Low",
        "auditDate": "ISO date string",
        "issueBreakdown": { "high": number, "medium": number, "low": number }
    },
    "lighthouseScores": {
        "performance": { "score": number, "label": "Poor" | "Good" | "Excellent" },
        "accessibility": { "score": number, "label": "Poor" | "Good" | "Excellent" },
        "seo": { "score": number, "label": "Poor" | "Good" | "Excellent" },
        "bestPractices": { "score": number, "label": "Poor" | "Good" | "Excellent" }
    },
    "issues": [
        { "type": "string", "severity": "High" | "Medium" | "Low", "description": "string", "recommendation": "string", "businessImpact": "string" }
    ]
}

The "report" field is a detailed, professional QA report in Markdown with sections for:
- Executive Summary
- Functional Testing Results
- User Interface & Experience (UI/UX) Analysis
- Link & Navigation Integrity
- Form & Input Validation
- Performance & Accessibility Observations
- Actionable Recommendations

Use emojis and clear headings to make it readable. Only output valid JSON, no additional text."#;

/// Context-specific checklist fragment for a category.
///
/// Exhaustive over `WebsiteType`: adding a variant fails compilation until a
/// checklist exists for it.
pub fn checklist(website_type: WebsiteType) -> &'static str {
    match website_type {
        WebsiteType::Ecommerce => {
            "- Check shopping cart functionality, product search, and checkout flow."
        }
        WebsiteType::Portfolio => {
            "- Check project gallery, resume download, and contact links."
        }
        WebsiteType::Blog => {
            "- Check article navigation, comment sections, and social sharing."
        }
        WebsiteType::Business => {
            "- Check service listings, about page, and lead generation forms."
        }
        WebsiteType::Educational => {
            "- Check course listings, student portal links, and resource downloads."
        }
        WebsiteType::News => {
            "- Check breaking news sections, category filters, and dynamic updates."
        }
        WebsiteType::Saas => {
            "- Check landing page conversion elements, feature highlights, pricing tables, and login/signup flows."
        }
    }
}

/// Build the audit prompt for a URL and optional category.
pub fn build_prompt(url: &str, website_type: Option<WebsiteType>) -> String {
    let category = website_type.map(WebsiteType::as_str).unwrap_or("general");
    let context = match website_type {
        Some(t) => format!(
            "Context-specific testing requirements for {}:\n{}\n\n",
            t,
            checklist(t)
        ),
        None => String::new(),
    };
    format!(
        "Perform a comprehensive production-ready QA analysis for a {} website: {}.\n\n{}{}",
        category, url, context, RESPONSE_STRUCTURE
    )
}
