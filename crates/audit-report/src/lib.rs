//! Report generation: prompt template plus model-output validation.

mod generator;
mod prompt;

pub use audit_types::{ReportError, ReportGenerator};
pub use generator::LlmReportGenerator;
pub use prompt::{build_prompt, checklist};
