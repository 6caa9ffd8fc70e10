use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Uniform completion capability: full ordered history in, one reply text out.
/// Each vendor adapter hides its own request/response shape behind this.
#[allow(async_fn_in_trait)]
pub trait ProviderClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String>;
}
