pub mod models;

// Re-export config from crate root
pub use crate::config;
