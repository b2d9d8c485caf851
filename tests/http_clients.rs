#![allow(clippy::unwrap_used)]
//! HTTP client tests against servers bound to ephemeral ports.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::json;
use tempfile::TempDir;

use langassist::chat::{Assistant, NEXT_STEP_MENU};
use langassist::server::build_app;
use langassist::storage::FileStore;
use langassist::tools::{FileToolClient, FileTools, ToolError, save_translation};
use langassist::translation::{TranslationService, TranslatorClient};

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_file_server(dir: &TempDir) -> String {
    let addr = spawn(build_app(FileStore::new(dir.path()), 30)).await;
    format!("http://{addr}")
}

async fn fake_translate(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> (StatusCode, axum::Json<serde_json::Value>) {
    let authorized = headers
        .get("Ocp-Apim-Subscription-Key")
        .is_some_and(|v| v == "secret");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({"error": {"code": 401000, "message": "invalid key"}})),
        );
    }

    let region = headers
        .get("Ocp-Apim-Subscription-Region")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("global")
        .to_string();
    let text = body[0]["Text"].as_str().unwrap_or_default().to_string();
    let to = params.get("to").cloned().unwrap_or_default();
    let version = params.get("api-version").cloned().unwrap_or_default();

    (
        StatusCode::OK,
        axum::Json(json!([{
            "detectedLanguage": {"language": "fr", "score": 0.875},
            "translations": [{"text": format!("{text}|{to}|{version}|{region}"), "to": to}]
        }])),
    )
}

async fn spawn_translator() -> String {
    let addr = spawn(Router::new().route("/translate", post(fake_translate))).await;
    format!("http://{addr}")
}

#[tokio::test]
async fn test_create_and_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let client = FileToolClient::new(spawn_file_server(&dir).await).unwrap();

    let result = save_translation(&client, "Hello world").await.unwrap();
    assert!(result.is_success());
    assert!(result.file_name.starts_with("Translation_"));

    let content = std::fs::read_to_string(dir.path().join(&result.file_name)).unwrap();
    assert_eq!(content, "Translation Data:\ntranslation\nHello world");

    let files = client.list_files().await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, result.file_name);
}

#[tokio::test]
async fn test_create_file_error_is_reported_in_body() {
    let dir = TempDir::new().unwrap();
    let client = FileToolClient::new(spawn_file_server(&dir).await).unwrap();

    let result = client.create_file("empty.txt", &[]).await.unwrap();

    assert!(!result.is_success());
    assert!(result.message.contains("Invalid data format"));
}

#[tokio::test]
async fn test_list_files_http_error() {
    let app = Router::new().route(
        "/tools/list_files",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let client = FileToolClient::new(format!("http://{}", spawn(app).await)).unwrap();

    let err = client.list_files().await.unwrap_err();

    assert!(matches!(err, ToolError::Http { status: 503, .. }));
    let message = err.to_string();
    assert!(message.starts_with("Failed to list files: HTTP 503 - maintenance."));
    assert!(message.contains("'/tools/list_files'"));
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FileToolClient::new(format!("http://{addr}")).unwrap();
    let err = client.list_files().await.unwrap_err();

    assert!(matches!(err, ToolError::Unreachable { tool: "list_files", .. }));
    assert!(err.to_string().contains(&format!("http://{addr}")));
}

#[tokio::test]
async fn test_translator_client_sends_key_region_and_query() {
    let client = TranslatorClient::new(
        spawn_translator().await,
        "secret".to_string(),
        Some("westeurope".to_string()),
    )
    .unwrap();

    let result = client.translate("Bonjour", "en").await.unwrap();

    let detected = result.detected_language.unwrap();
    assert_eq!(detected.language, "fr");
    assert!((detected.score - 0.875).abs() < f64::EPSILON);
    assert_eq!(result.translations[0].text, "Bonjour|en|3.0|westeurope");
}

#[tokio::test]
async fn test_translator_client_reports_status() {
    let client =
        TranslatorClient::new(spawn_translator().await, "wrong".to_string(), None).unwrap();

    let err = client.translate("Bonjour", "en").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("invalid key"));
}

#[tokio::test]
async fn test_assistant_end_to_end() {
    let dir = TempDir::new().unwrap();
    let translator =
        TranslatorClient::new(spawn_translator().await, "secret".to_string(), None).unwrap();
    let files = FileToolClient::new(spawn_file_server(&dir).await).unwrap();
    let mut assistant = Assistant::new(Arc::new(translator), Arc::new(files));

    assistant.process_message("Bonjour le monde").await;

    let reply = assistant.process_message("1").await;
    assert_eq!(
        reply.text,
        format!("Detected language: fr (Confidence: 0.88)\n{NEXT_STEP_MENU}")
    );

    let reply = assistant.process_message("2").await;
    assert!(reply.text.starts_with("Translated to English: Bonjour le monde|en|3.0|global"));

    let reply = assistant.process_message("3").await;
    assert!(reply.text.starts_with("Saved translation to Translation_"));

    let reply = assistant.process_message("list files").await;
    assert!(reply.text.starts_with("Available files: Translation_"));

    let reply = assistant.process_message("exit").await;
    assert!(reply.exit);
}
