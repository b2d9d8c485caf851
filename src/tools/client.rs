use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use crate::server::{CREATE_FILE_PATH, LIST_FILES_PATH};
use crate::storage::{CreateFileResponse, FileEntry, Row, timestamp};

/// File operations the assistant can invoke.
#[async_trait]
pub trait FileTools: Send + Sync {
    async fn list_files(&self) -> Result<Vec<FileEntry>, ToolError>;

    async fn create_file(
        &self,
        file_name: &str,
        rows: &[Row],
    ) -> Result<CreateFileResponse, ToolError>;
}

/// Default name for a saved translation.
pub fn translation_file_name(timestamp: &str) -> String {
    format!("Translation_{timestamp}.txt")
}

/// The single-row payload a translation is saved as.
pub fn translation_rows(translation: &str) -> Vec<Row> {
    let mut row = Row::new();
    row.insert(
        "translation".to_string(),
        Value::String(translation.to_string()),
    );
    vec![row]
}

/// Saves `translation` under a timestamped file name.
pub async fn save_translation<T>(tools: &T, translation: &str) -> Result<CreateFileResponse, ToolError>
where
    T: FileTools + ?Sized,
{
    let file_name = translation_file_name(&timestamp());
    tools
        .create_file(&file_name, &translation_rows(translation))
        .await
}

/// HTTP client for the file server.
///
/// Holds one connection pool for the lifetime of the session.
pub struct FileToolClient {
    client: Client,
    base_url: String,
}

impl FileToolClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build file server HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn unreachable(&self, tool: &'static str, source: reqwest::Error) -> ToolError {
        ToolError::Unreachable {
            tool,
            url: self.base_url.clone(),
            source,
        }
    }
}

async fn http_error(
    response: reqwest::Response,
    action: &'static str,
    path: &'static str,
) -> ToolError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ToolError::Http {
        action,
        status: status.as_u16(),
        body,
        path,
    }
}

#[async_trait]
impl FileTools for FileToolClient {
    async fn list_files(&self) -> Result<Vec<FileEntry>, ToolError> {
        let url = format!("{}{LIST_FILES_PATH}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unreachable("list_files", e))?;

        if response.status() != StatusCode::OK {
            return Err(http_error(response, "list files", LIST_FILES_PATH).await);
        }

        let files: Vec<FileEntry> = response.json().await.map_err(|source| ToolError::Decode {
            tool: "list_files",
            source,
        })?;
        debug!(count = files.len(), "Listed files");
        Ok(files)
    }

    async fn create_file(
        &self,
        file_name: &str,
        rows: &[Row],
    ) -> Result<CreateFileResponse, ToolError> {
        let url = format!("{}{CREATE_FILE_PATH}", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("file_name", file_name)])
            .json(rows)
            .send()
            .await
            .map_err(|e| self.unreachable("create_file", e))?;

        if response.status() != StatusCode::OK {
            return Err(http_error(response, "create file", CREATE_FILE_PATH).await);
        }

        let result: CreateFileResponse =
            response.json().await.map_err(|source| ToolError::Decode {
                tool: "create_file",
                source,
            })?;
        debug!(file = %result.file_name, status = ?result.status, "Create file result");
        Ok(result)
    }
}
