//! ChatExchange Entity

use serde::{Deserialize, Serialize};

/// A user question and the reply it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_text: String,
    pub reply_text: String,
}

impl ChatExchange {
    pub fn new(user_text: impl Into<String>, reply_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            reply_text: reply_text.into(),
        }
    }
}
