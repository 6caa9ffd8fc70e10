use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::config::ProviderCredentials;
use crate::llm::models::provider_base::{Message, ProviderClient};

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Shown in error messages so DeepSeek faults do not read as OpenAI faults
    pub vendor_label: &'static str,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            vendor_label: "OpenAI",
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_vendor_label(mut self, label: &'static str) -> Self {
        self.vendor_label = label;
        self
    }
}

impl ProviderClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let request_body = build_chat_completions_request_body(&self.model, messages);
        let url_candidates = chat_completions_url_candidates(&self.base_url);

        log::debug!(
            "{} chat completions request: model={}, history_len={}",
            self.vendor_label,
            self.model,
            messages.len()
        );

        let response = send_first_successful_chat_completions_request(
            &self.http_client,
            &url_candidates,
            &self.api_key,
            &request_body,
        )
        .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("{} API error ({}): {}", self.vendor_label, status, error_text);
        }

        let json: Value = response
            .json()
            .await
            .context("Failed to parse response JSON")?;

        reply_text_from_chat_completions(&json).with_context(|| {
            format!("{} response carried no assistant message", self.vendor_label)
        })
    }
}

/// OpenAI-compatible chat completions against the DeepSeek host
pub fn create_deepseek(creds: &ProviderCredentials) -> OpenAiClient {
    OpenAiClient::new(
        creds.base_url.clone(),
        creds.api_key.clone(),
        creds.model.clone(),
    )
    .with_vendor_label("DeepSeek")
}

pub(crate) fn build_chat_completions_request_body(model: &str, messages: &[Message]) -> Value {
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
        "messages": converted_messages,
    })
}

pub(crate) fn reply_text_from_chat_completions(response: &Value) -> Result<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("missing /choices/0/message/content in response"))
}

pub(crate) fn chat_completions_url_candidates(api_base: &str) -> Vec<String> {
    let base = api_base.trim_end_matches('/');
    let mut out = Vec::new();
    out.push(format!("{}/chat/completions", base));
    out.push(format!("{}/v1/chat/completions", base));
    out
}

async fn send_first_successful_chat_completions_request(
    http_client: &reqwest::Client,
    url_candidates: &[String],
    api_key: &str,
    request_body: &Value,
) -> Result<reqwest::Response> {
    let mut last_err: Option<anyhow::Error> = None;

    for url in url_candidates {
        let response = http_client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status() == reqwest::StatusCode::NOT_FOUND {
                    last_err = Some(anyhow::anyhow!("API endpoint not found: {}", url));
                    continue;
                }
                return Ok(resp);
            }
            Err(e) => {
                last_err = Some(
                    anyhow::anyhow!(e)
                        .context(format!("Failed to send request to chat API ({})", url)),
                );
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow::anyhow!("Failed to send request to chat API")))
}
