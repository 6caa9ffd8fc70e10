
#[cfg(test)]
pub mod chat {
    pub mod indicator;
    pub mod input;
    pub mod session;
}

#[cfg(test)]
pub mod llm {
    pub mod models {
        pub mod claude;
        pub mod openai;
        pub mod provider_handle;
    }
}
