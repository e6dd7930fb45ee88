use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::error::ChatError;
use std::time::Duration;

const EMBED_CONCURRENCY: usize = 8;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

/// Client for the embedding collaborator (Ollama embeddings API).
///
/// Deterministic for identical input text and model version; one vector per
/// text.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    base_url: String,
    model: String,
}

impl EmbeddingClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, ChatError> {
        let url = format!("{}/api/embeddings", self.base_url);
        let request = EmbeddingRequest {
            model: &self.model,
            prompt: text,
        };
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Embedding(format!("embedding request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Embedding(format!(
                "embedding service returned {status}: {body}"
            )));
        }
        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Embedding(format!("unexpected embedding response: {e}")))?;
        if parsed.embedding.is_empty() {
            return Err(ChatError::Embedding(
                "embedding service returned an empty vector".to_string(),
            ));
        }
        Ok(parsed.embedding)
    }

    /// Embed a batch of texts, preserving input order.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ChatError> {
        let results = stream::iter(texts.iter().map(|text| self.embed(text)))
            .buffered(EMBED_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;
        results.into_iter().collect()
    }
}
