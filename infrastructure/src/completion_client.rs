use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::error::ChatError;
use std::time::Duration;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for the hosted completion service (OpenAI-compatible chat
/// completions with bearer auth, e.g. Groq).
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        api_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Send a single-turn completion request: one system message plus one
    /// user message. Any failure maps to `CompletionRequest`, which the
    /// caller reports and survives.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::CompletionRequest(format!("request failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::CompletionRequest(format!("failed to read response: {e}")))?;
        if !status.is_success() {
            return Err(ChatError::CompletionRequest(format!(
                "completion service returned {status}: {body}"
            )));
        }
        extract_reply(&body)
    }
}

/// Pull the first choice's message content out of a completion response body.
fn extract_reply(body: &str) -> Result<String, ChatError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::CompletionRequest(format!("unexpected response body: {e}")))?;
    let first = parsed.choices.into_iter().next().ok_or_else(|| {
        ChatError::CompletionRequest("completion response contained no choices".to_string())
    })?;
    Ok(first.message.content)
}
