use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::cons::provider_cons::ChatProvider;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";

/// Credentials and model identifier for one provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCredentials {
    /// Base URL for the provider API
    pub base_url: String,

    /// API key for authentication
    pub api_key: String,

    /// Model name to use
    pub model: String,
}

/// Global application configuration, read from the environment once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub openai: ProviderCredentials,
    pub claude: ProviderCredentials,
    pub gemini: ProviderCredentials,
    pub deepseek: ProviderCredentials,
}

impl AppConfig {
    /// Load configuration from the environment. Every compiled-in provider
    /// must have its key and model variables set; a missing variable is a
    /// startup error regardless of which provider the user later selects.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai: provider_from_env(
                "OPENAI_API_KEY",
                "OPENAI_MODEL",
                "OPENAI_BASE_URL",
                DEFAULT_OPENAI_BASE_URL,
            )?,
            claude: provider_from_env(
                "ANTHROPIC_API_KEY",
                "CLAUDE_MODEL",
                "ANTHROPIC_BASE_URL",
                DEFAULT_ANTHROPIC_BASE_URL,
            )?,
            gemini: provider_from_env(
                "GEMINI_API_KEY",
                "GEMINI_MODEL",
                "GEMINI_BASE_URL",
                DEFAULT_GEMINI_BASE_URL,
            )?,
            deepseek: provider_from_env(
                "DEEPSEEK_API_KEY",
                "DEEPSEEK_MODEL",
                "DEEPSEEK_BASE_URL",
                DEFAULT_DEEPSEEK_BASE_URL,
            )?,
        })
    }

    pub fn credentials_for(&self, provider: ChatProvider) -> &ProviderCredentials {
        match provider {
            ChatProvider::OpenAi => &self.openai,
            ChatProvider::Claude => &self.claude,
            ChatProvider::Gemini => &self.gemini,
            ChatProvider::DeepSeek => &self.deepseek,
        }
    }
}

pub(crate) fn provider_from_env(
    key_var: &str,
    model_var: &str,
    base_url_var: &str,
    default_base_url: &str,
) -> Result<ProviderCredentials> {
    Ok(ProviderCredentials {
        base_url: optional_var(base_url_var).unwrap_or_else(|| default_base_url.to_string()),
        api_key: required_var(key_var)?,
        model: required_var(model_var)?,
    })
}

pub(crate) fn required_var(name: &str) -> Result<String> {
    let value = env::var(name)
        .with_context(|| format!("{} not found in environment variables", name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} is set but empty", name);
    }
    Ok(value)
}

pub(crate) fn optional_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
