use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_VERSION: &str = "3.0";

/// A text translation backend.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translates `text` into `to`, detecting the source language on the way.
    async fn translate(&self, text: &str, to: &str) -> Result<TranslationResult>;
}

#[derive(Debug, Serialize)]
struct TextItem<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

/// Per-input result of a `/translate` call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Translation {
    pub text: String,
    pub to: String,
}

/// Client for the Azure Translator Text API v3.
pub struct TranslatorClient {
    client: Client,
    endpoint: String,
    api_key: String,
    region: Option<String>,
}

impl TranslatorClient {
    pub fn new(endpoint: String, api_key: String, region: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build translator HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            region,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationService for TranslatorClient {
    async fn translate(&self, text: &str, to: &str) -> Result<TranslationResult> {
        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));

        let mut http_request = self
            .client
            .post(&url)
            .query(&[("api-version", API_VERSION), ("to", to)])
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&[TextItem { text }]);

        if let Some(region) = &self.region {
            http_request = http_request.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to translator endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translator request failed with status {status}: {body}");
        }

        let results: Vec<TranslationResult> = response
            .json()
            .await
            .context("Failed to parse translator response")?;

        Ok(results.into_iter().next().unwrap_or_default())
    }
}
