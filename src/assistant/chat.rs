// src/assistant/chat.rs
// JSON client for the remote chat endpoint.

use crate::error::{CivicError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    /// None on the first turn; serialized as an explicit null.
    pub conversation_id: Option<String>,
    pub language_tag: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub conversation_id: String,
    pub ai_response: String,
}

#[derive(Debug, Deserialize)]
struct ChatErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Single attempt, no retry and no timeout. A hung server keeps the
    /// widget in its awaiting-reply state until the server answers.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ChatReply>().await?)
        } else {
            let detail = match response.json::<ChatErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("chat endpoint returned {}", status),
            };
            Err(CivicError::ChatError(detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape_first_turn() {
        let request = ChatRequest {
            user_id: "citizen-42".to_string(),
            message: "hello".to_string(),
            conversation_id: None,
            language_tag: "en-IN".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "userId": "citizen-42",
                "message": "hello",
                "conversationId": null,
                "languageTag": "en-IN",
            })
        );
    }

    #[test]
    fn test_request_wire_shape_continuing_turn() {
        let request = ChatRequest {
            user_id: "citizen-42".to_string(),
            message: "and the water supply?".to_string(),
            conversation_id: Some("conv-7".to_string()),
            language_tag: "hi-IN".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["conversationId"], json!("conv-7"));
        assert_eq!(value["languageTag"], json!("hi-IN"));
    }

    #[test]
    fn test_reply_parses_camel_case() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"conversationId":"conv-9","aiResponse":"Roads in Madhapur are under repair."}"#,
        )
        .unwrap();
        assert_eq!(reply.conversation_id, "conv-9");
        assert_eq!(reply.ai_response, "Roads in Madhapur are under repair.");
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let client = ChatClient::new("http://localhost:5000/");
        assert_eq!(client.endpoint(), "http://localhost:5000/api/chat");
    }
}
