use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatProvider {
    OpenAi,
    Claude,
    Gemini,
    DeepSeek,
}

/// Dispatch order for "all" mode. Every broadcast walks this sequence.
pub const PROVIDER_ORDER: [ChatProvider; 4] = [
    ChatProvider::OpenAi,
    ChatProvider::Claude,
    ChatProvider::Gemini,
    ChatProvider::DeepSeek,
];

impl ChatProvider {
    /// Returns the unique identifier used in configuration and logs (e.g., "openai", "claude")
    pub fn provider_name(&self) -> &'static str {
        match self {
            ChatProvider::OpenAi => "openai",
            ChatProvider::Claude => "claude",
            ChatProvider::Gemini => "gemini",
            ChatProvider::DeepSeek => "deepseek",
        }
    }

    /// Name shown in the option menu and above each reply block
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatProvider::OpenAi => "ChatGPT",
            ChatProvider::Claude => "Claude",
            ChatProvider::Gemini => "Gemini",
            ChatProvider::DeepSeek => "DeepSeek",
        }
    }

    /// Helper to parse from a string (handles aliases)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" | "chatgpt" => Some(ChatProvider::OpenAi),
            "claude" | "anthropic" => Some(ChatProvider::Claude),
            "gemini" => Some(ChatProvider::Gemini),
            "deepseek" => Some(ChatProvider::DeepSeek),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_name())
    }
}
