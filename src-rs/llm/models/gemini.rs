use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::llm::models::provider_base::{Message, ProviderClient};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            http_client: reqwest::Client::new(),
        }
    }
}

impl ProviderClient for GeminiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let prompt = flatten_history(messages);
        let request_body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        log::debug!(
            "Gemini generateContent request: model={}, history_len={}",
            self.model,
            messages.len()
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let json: Value = response
            .json()
            .await
            .context("Failed to parse response JSON")?;

        reply_text_from_generate_content(&json)
            .context("Gemini response carried no candidate text")
    }
}

/// Gemini's dialect takes one prompt string, not a structured message list.
/// The whole history is folded into a single newline-joined prompt.
pub(crate) fn flatten_history(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| msg.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn reply_text_from_generate_content(response: &Value) -> Result<String> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing /candidates/0/content/parts/0/text in response"))
}
