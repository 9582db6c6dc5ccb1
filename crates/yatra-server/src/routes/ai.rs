//! AI Routes - Temple guide chat

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Ask the temple guide a question
///
/// A missing or unreadable body is treated like an empty message.
#[utoipa::path(
    post,
    path = "/api/ai",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Guide reply", body = ChatResponse),
        (status = 500, description = "Provider failure, generic reply", body = ChatResponse)
    ),
    tag = "AI"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Option<Json<ChatRequest>>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatResponse>)> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let exchange = state
        .chat
        .reply(request.message.as_deref())
        .await
        .map_err(|err| {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ChatResponse { reply: err.message }))
        })?;

    Ok(Json(ChatResponse {
        reply: exchange.reply_text,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/ai", post(chat))
}
