use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::common::is_blank;
use crate::handlers::{ApiJson, SUCCESS_CODE};
use crate::services::{ChatService, ReplySource};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub code: u32,
    pub text: String,
    pub response: String,
    pub source: ReplySource,
}

/// Reply to a user utterance
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply found", body = ChatResponse),
        (status = 400, description = "Missing parameter, bad JSON or empty text")
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if is_blank(&payload.text) {
        return Err(AppError::EmptyContent);
    }

    let reply = ChatService::reply(&state.db, &payload.text, &state.config.default_response).await?;

    Ok(Json(ChatResponse {
        code: SUCCESS_CODE,
        text: payload.text,
        response: reply.response,
        source: reply.source,
    }))
}
