// Data models and LLM client interfaces

pub mod provider_handle;
pub mod provider_base;
pub mod claude;

pub mod gemini;
pub mod openai;
