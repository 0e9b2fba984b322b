//! Gemini-compatible text generation client.

mod gemini;
#[cfg(feature = "test-util")]
pub mod mock;

pub use audit_types::{LlmClient, LlmError};
pub use gemini::GeminiClient;

#[cfg(feature = "test-util")]
pub use mock::MockLlmClient;
