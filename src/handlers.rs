//! HTTP handlers for the file server.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::storage::{CreateFileParams, FileEntry, FileStore, Row};

/// Tool names exposed under `/tools`.
pub const TOOLS: &[&str] = &["list_files", "create_file"];

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

pub async fn livez() -> &'static str {
    "ok"
}

pub async fn list_tools() -> Json<&'static [&'static str]> {
    Json(TOOLS)
}

pub async fn list_files(State(store): State<FileStore>) -> Response {
    let result = tokio::task::spawn_blocking(move || store.list_files()).await;

    match result {
        Ok(Ok(files)) => {
            let entries: Vec<FileEntry> = files.iter().map(|f| f.to_entry()).collect();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Ok(Err(e)) => {
            error!(error = %e, "Error listing text files");
            internal_error(format!("Error listing text files: {e}"))
        }
        Err(e) => {
            error!(error = %e, "List task failed");
            internal_error(format!("Error listing text files: {e}"))
        }
    }
}

pub async fn create_file(
    State(store): State<FileStore>,
    Query(params): Query<CreateFileParams>,
    Json(rows): Json<Vec<Row>>,
) -> Response {
    let result =
        tokio::task::spawn_blocking(move || store.create_response(&params.file_name, &rows)).await;

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!(error = %e, "Create task failed");
            internal_error(format!("Failed to create text file: {e}"))
        }
    }
}
