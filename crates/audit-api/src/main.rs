//! AI QA audit REST API server: /api/generate, /api/history.

use audit_api::server::{self, AppState};
use audit_history::{InMemoryHistoryStore, JsonFileHistoryStore};
use audit_llm::GeminiClient;
use audit_report::LlmReportGenerator;
use audit_types::{HistoryStore, LlmClient, ReportGenerator};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator: Option<Arc<dyn ReportGenerator>> = match GeminiClient::from_env() {
        Some(client) => {
            let llm: Arc<dyn LlmClient> = Arc::new(client);
            Some(Arc::new(LlmReportGenerator::new(llm)))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; /api/generate will return 500");
            None
        }
    };

    let history: Arc<dyn HistoryStore> = match std::env::var("AUDIT_HISTORY_PATH") {
        Ok(path) => {
            tracing::info!(path, "using file-backed history");
            Arc::new(JsonFileHistoryStore::new(path))
        }
        Err(_) => Arc::new(InMemoryHistoryStore::new()),
    };

    let state = Arc::new(AppState { generator, history });
    let app = server::router(state);

    let addr: SocketAddr = std::env::var("AUDIT_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    tracing::info!("audit API listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
