use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::llm::models::provider_base::{Message, ProviderClient};

#[derive(Debug, Clone)]
pub struct ClaudeClient {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    http_client: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            http_client: reqwest::Client::new(),
        }
    }
}

impl ProviderClient for ClaudeClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let request_body = build_messages_request_body(&self.model, messages);

        log::debug!(
            "Claude messages request: model={}, history_len={}",
            self.model,
            messages.len()
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Claude API error ({}): {}", status, error_text);
        }

        let json: Value = response
            .json()
            .await
            .context("Failed to parse response JSON")?;

        reply_text_from_messages_response(&json)
            .context("Claude response carried no text block")
    }
}

pub(crate) fn build_messages_request_body(model: &str, messages: &[Message]) -> Value {
    let converted_messages: Vec<Value> = messages
        .iter()
        .map(|msg| {
            json!({
                "role": msg.role,
                "content": msg.content,
            })
        })
        .collect();

    json!({
        "model": model,
        "max_tokens": 1024,
        "messages": converted_messages,
    })
}

pub(crate) fn reply_text_from_messages_response(response: &Value) -> Result<String> {
    response
        .pointer("/content/0/text")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing /content/0/text in response"))
}
