//! LLM Provider Port
//!
//! One chat-completions round trip. The guide only ever sends a system
//! prompt followed by the visitor's message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::UpstreamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// Wire-shaped chat message (`{"role": .., "content": ..}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A generated reply and what it cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub content: String,
    /// Model that actually answered (may be a dated snapshot of the requested one)
    pub model: String,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage])
        -> Result<CompletionResponse, UpstreamError>;

    /// System prompt plus a single user turn
    async fn ask(&self, system: &str, prompt: &str) -> Result<CompletionResponse, UpstreamError> {
        self.complete(&[ChatMessage::system(system), ChatMessage::user(prompt)])
            .await
    }

    fn provider_name(&self) -> &str;

    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_serialize_in_wire_shape() {
        let turns = [ChatMessage::system("You are a guide."), ChatMessage::user("Hi")];
        let json = serde_json::to_value(turns).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                { "role": "system", "content": "You are a guide." },
                { "role": "user", "content": "Hi" },
            ])
        );
    }

    #[test]
    fn test_assistant_role_is_not_accepted() {
        let parsed = serde_json::from_str::<MessageRole>("\"assistant\"");
        assert!(parsed.is_err());
    }
}
