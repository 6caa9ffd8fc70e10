use anyhow::Result;

use crate::config::AppConfig;
use crate::cons::provider_cons::{ChatProvider, PROVIDER_ORDER};

use super::claude::ClaudeClient;
use super::gemini::GeminiClient;
use super::openai::{create_deepseek, OpenAiClient};
pub use super::provider_base::{Message, ProviderClient};

pub enum AnyProviderClient {
    OpenAi(OpenAiClient),
    Claude(ClaudeClient),
    Gemini(GeminiClient),
    DeepSeek(OpenAiClient),
}

impl ProviderClient for AnyProviderClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        match self {
            AnyProviderClient::OpenAi(c) => c.complete(messages).await,
            AnyProviderClient::Claude(c) => c.complete(messages).await,
            AnyProviderClient::Gemini(c) => c.complete(messages).await,
            AnyProviderClient::DeepSeek(c) => c.complete(messages).await,
        }
    }
}

pub fn create_client(provider: ChatProvider, config: &AppConfig) -> AnyProviderClient {
    let creds = config.credentials_for(provider);
    match provider {
        ChatProvider::OpenAi => AnyProviderClient::OpenAi(OpenAiClient::new(
            creds.base_url.clone(),
            creds.api_key.clone(),
            creds.model.clone(),
        )),
        ChatProvider::Claude => AnyProviderClient::Claude(ClaudeClient::new(
            creds.base_url.clone(),
            creds.api_key.clone(),
            creds.model.clone(),
        )),
        ChatProvider::Gemini => AnyProviderClient::Gemini(GeminiClient::new(
            creds.base_url.clone(),
            creds.api_key.clone(),
            creds.model.clone(),
        )),
        ChatProvider::DeepSeek => AnyProviderClient::DeepSeek(create_deepseek(creds)),
    }
}

/// One client per compiled-in provider, in dispatch order. Construction
/// happens before any user interaction so a bad configuration fails fast.
pub fn create_all_clients(config: &AppConfig) -> Vec<(ChatProvider, AnyProviderClient)> {
    PROVIDER_ORDER
        .iter()
        .map(|&provider| (provider, create_client(provider, config)))
        .collect()
}
