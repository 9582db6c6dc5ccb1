//! Chat Application Service (Use Case)
//!
//! One language-model round trip per message with the guide persona as the
//! system prompt. Failures never reach the caller as raw provider errors.

use std::sync::Arc;

use yatra::{ChatExchange, LlmProvider, ProxyError};

/// Used when the request carries no message
pub const DEFAULT_GREETING: &str = "Hello";

pub const GUIDE_SYSTEM_PROMPT: &str =
    "You are a helpful guide about Mathura and Vrindavan temples.";

/// Reply sent with a 500 when the provider call fails
pub const SERVER_ERROR_REPLY: &str = "Server error. Check backend logs.";

/// Application service for guide chat
pub struct ChatService<P: LlmProvider + ?Sized = dyn LlmProvider> {
    provider: Arc<P>,
}

impl<P: LlmProvider + ?Sized> ChatService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Answer a message; absent or blank messages are treated as the greeting
    pub async fn reply(&self, message: Option<&str>) -> Result<ChatExchange, ProxyError> {
        let user_text = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_GREETING);

        match self
            .provider
            .ask(GUIDE_SYSTEM_PROMPT, user_text)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    "💬 Chat via {} ({}): {} chars in, {} chars out, {} tokens",
                    self.provider.provider_name(),
                    response.model,
                    user_text.chars().count(),
                    response.content.chars().count(),
                    response.total_tokens
                );
                Ok(ChatExchange::new(user_text, response.content))
            }
            Err(e) => {
                tracing::error!(
                    provider = self.provider.provider_name(),
                    kind = %e.kind(),
                    "Chat error: {}",
                    e
                );
                Err(ProxyError::internal(SERVER_ERROR_REPLY))
            }
        }
    }
}
