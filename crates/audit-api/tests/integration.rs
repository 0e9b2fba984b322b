//! Integration tests: generate, validation, configuration, history flow.

use audit_api::server::{self, AppState};
use audit_history::InMemoryHistoryStore;
use audit_llm::MockLlmClient;
use audit_report::LlmReportGenerator;
use audit_types::{HistoryStore, LlmClient, ReportGenerator};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_app(llm: Arc<MockLlmClient>) -> (axum::Router, Arc<dyn HistoryStore>) {
    let client: Arc<dyn LlmClient> = llm;
    let generator: Arc<dyn ReportGenerator> = Arc::new(LlmReportGenerator::new(client));
    let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());
    let state = Arc::new(AppState {
        generator: Some(generator),
        history: Arc::clone(&history),
    });
    (server::router(state), history)
}

fn unconfigured_app() -> axum::Router {
    let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());
    let state = Arc::new(AppState {
        generator: None,
        history,
    });
    server::router(state)
}

fn post_generate(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(res: axum::response::Response) -> serde_json::Value {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = test_app(Arc::new(MockLlmClient::with_canned_report("example.com")));
    let req = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let j = json_body(res).await;
    assert_eq!(j["status"], "ok");
    assert_eq!(j["message"], "Backend API is operational");
}

#[tokio::test]
async fn missing_url_is_400_and_model_is_never_called() {
    let llm = Arc::new(MockLlmClient::with_canned_report("example.com"));
    let (app, _) = test_app(Arc::clone(&llm));

    for body in [json!({}), json!({ "url": "  " }), json!({ "type": "blog" })] {
        let res = app.clone().oneshot(post_generate(body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let j = json_body(res).await;
        assert_eq!(j["success"], false);
        assert_eq!(j["error"], "URL is required");
    }
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_is_500() {
    let app = unconfigured_app();
    let res = app
        .oneshot(post_generate(json!({ "url": "example.com", "type": "ecommerce" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let j = json_body(res).await;
    assert_eq!(j["success"], false);
    assert_eq!(j["error"], "Gemini API key is not configured on the server");
}

#[tokio::test]
async fn generate_returns_report_and_records_history() {
    let llm = Arc::new(MockLlmClient::with_canned_report("example.com"));
    let (app, _) = test_app(Arc::clone(&llm));

    let res = app
        .clone()
        .oneshot(post_generate(json!({ "url": "example.com", "type": "ecommerce" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let j = json_body(res).await;
    assert_eq!(j["success"], true);
    assert!(!j["report"].as_str().unwrap().is_empty());
    assert_eq!(j["executiveSummary"]["riskLevel"], "Medium");
    assert_eq!(llm.call_count(), 1);

    let req = Request::builder()
        .method("GET")
        .uri("/api/history")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let j = json_body(res).await;
    assert_eq!(j["success"], true);
    let items = j["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "example.com");
    assert_eq!(items[0]["type"], "ecommerce");
    assert_eq!(items[0]["overallScore"], 82.0);
    assert_eq!(items[0]["response"]["success"], true);
}

#[tokio::test]
async fn report_without_summary_is_not_recorded() {
    let llm = Arc::new(MockLlmClient::with_text(
        r##"{"success": true, "message": "ok", "report": "# Thin report"}"##,
    ));
    let (app, history) = test_app(llm);

    let res = app
        .oneshot(post_generate(json!({ "url": "example.com" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(history.get().await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_failure_is_500_generic() {
    let (app, _) = test_app(Arc::new(MockLlmClient::failing("quota exceeded")));
    let res = app
        .oneshot(post_generate(json!({ "url": "example.com" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let j = json_body(res).await;
    assert_eq!(j["success"], false);
    assert_eq!(j["error"], "Failed to generate report. Check server logs.");
}

#[tokio::test]
async fn malformed_model_output_is_500_generic() {
    let (app, _) = test_app(Arc::new(MockLlmClient::with_text("not json at all")));
    let res = app
        .oneshot(post_generate(json!({ "url": "example.com" })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let j = json_body(res).await;
    assert_eq!(j["success"], false);
    assert_eq!(j["error"], "Failed to generate report. Check server logs.");
}

#[tokio::test]
async fn history_delete_and_clear() {
    let (app, _) = test_app(Arc::new(MockLlmClient::with_canned_report("example.com")));

    for url in ["a.example.com", "b.example.com"] {
        let res = app
            .clone()
            .oneshot(post_generate(json!({ "url": url, "type": "saas" })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let req = Request::builder()
        .method("GET")
        .uri("/api/history")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let j = json_body(res).await;
    let items = j["data"].as_array().unwrap().clone();
    assert_eq!(items.len(), 2);
    // Most recent first.
    assert_eq!(items[0]["url"], "b.example.com");
    let id = items[0]["id"].as_str().unwrap().to_string();

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/history/{}", id))
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Deleting the same id again is a 404.
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/history/{}", id))
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/history")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let req = Request::builder()
        .method("GET")
        .uri("/api/history")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    let j = json_body(res).await;
    assert!(j["data"].as_array().unwrap().is_empty());
}
