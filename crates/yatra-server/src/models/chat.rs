//! Chat DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /api/ai`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Visitor's message; a greeting is used when absent or blank
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply body, used for both success and failure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
}
