use crate::llm::models::claude::{build_messages_request_body, reply_text_from_messages_response};
use crate::llm::models::provider_base::Message;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_carries_model_token_cap_and_messages() {
        let history = vec![Message::user("hi")];
        let body = build_messages_request_body("claude-sonnet", &history);

        assert_eq!(body["model"], "claude-sonnet");
        assert_eq!(body["max_tokens"], 1024);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "hi");
    }

    #[test]
    fn reply_text_is_extracted_from_first_content_block() {
        let response = json!({
            "content": [{ "type": "text", "text": "four" }]
        });
        assert_eq!(
            reply_text_from_messages_response(&response).unwrap(),
            "four"
        );
    }

    #[test]
    fn missing_text_block_is_an_error() {
        let response = json!({ "content": [] });
        assert!(reply_text_from_messages_response(&response).is_err());

        let response = json!({ "stop_reason": "end_turn" });
        assert!(reply_text_from_messages_response(&response).is_err());
    }
}
