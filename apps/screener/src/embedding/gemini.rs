/// Gemini embedding client — the only place the screener calls the Google
/// Generative Language API.
///
/// Uses `batchEmbedContents` so a whole ranking batch costs one round trip.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EmbeddingError, EmbeddingProvider};
use crate::config::EmbeddingConfig;

#[derive(Debug, Serialize)]
struct BatchEmbedRequest<'a> {
    requests: Vec<EmbedContentRequest<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest<'a> {
    model: &'a str,
    content: Content<'a>,
    task_type: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BatchEmbedResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GeminiEmbedder {
    client: Client,
    api_key: Option<String>,
    model: String,
    task_type: String,
    endpoint: String,
}

impl GeminiEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let model = qualified_model(&config.model);
        let endpoint = format!(
            "{}/v1beta/{}:batchEmbedContents",
            config.api_url.trim_end_matches('/'),
            model
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model,
            task_type: config.task_type.clone(),
            endpoint,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let api_key = self.api_key.as_deref().ok_or(EmbeddingError::MissingApiKey)?;

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| EmbedContentRequest {
                    model: &self.model,
                    content: Content {
                        parts: vec![Part { text }],
                    },
                    task_type: &self.task_type,
                })
                .collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: BatchEmbedResponse = serde_json::from_str(&body)?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: parsed.embeddings.len(),
            });
        }

        debug!(
            "Embedded {} texts with {} (dim {})",
            texts.len(),
            self.model,
            parsed.embeddings.first().map_or(0, |e| e.values.len())
        );

        Ok(parsed.embeddings.into_iter().map(|e| e.values).collect())
    }

    fn ensure_ready(&self) -> Result<(), EmbeddingError> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(EmbeddingError::MissingApiKey),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// The API addresses models as `models/<id>`; accept the bare id as well.
fn qualified_model(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}
