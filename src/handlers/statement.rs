use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::{validate_content, CodeResponse, DeleteRequest, SearchParams};
use crate::handlers::SUCCESS_CODE;
use crate::middlewares::{AdminJson, AdminQuery, Credentials};
use crate::models::{CreateStatement, Statement};
use crate::repositories::{Repository, StatementRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStatementRequest {
    /// The utterance to learn
    pub text: String,
    /// The reply learned for it
    pub response: String,
    pub username: String,
    pub token: String,
}

impl Credentials for CreateStatementRequest {
    fn username(&self) -> &str {
        &self.username
    }

    fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateStatementResponse {
    pub code: u32,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatementSearchResponse {
    pub statements: Vec<Statement>,
    pub number: usize,
}

// ============ Handlers ============

/// Learn a statement together with its response
#[utoipa::path(
    post,
    path = "/admin/create_statement",
    request_body = CreateStatementRequest,
    responses(
        (status = 200, description = "Statements created", body = CreateStatementResponse),
        (status = 400, description = "Missing parameter, bad JSON or empty text/response"),
        (status = 401, description = "Token check failed")
    ),
    tag = "Statements"
)]
pub async fn create_statement(
    State(state): State<AppState>,
    AdminJson(_admin, payload): AdminJson<CreateStatementRequest>,
) -> AppResult<Json<CreateStatementResponse>> {
    validate_content(&payload.text, &payload.response)?;

    let create_statement = CreateStatement {
        text: payload.text,
        response: payload.response,
    };

    let (question, answer) = StatementRepository::create_pair(&state.db, &create_statement).await?;

    Ok(Json(CreateStatementResponse {
        code: SUCCESS_CODE,
        statements: vec![question, answer],
    }))
}

/// Search statements by id or exact text
#[utoipa::path(
    get,
    path = "/admin/search_statement",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching statements", body = StatementSearchResponse),
        (status = 400, description = "Missing or invalid parameter"),
        (status = 401, description = "Token check failed")
    ),
    tag = "Statements"
)]
pub async fn search_statement(
    State(state): State<AppState>,
    AdminQuery(_admin, params): AdminQuery<SearchParams>,
) -> AppResult<Json<StatementSearchResponse>> {
    let lookup = params.lookup()?;
    let statements = StatementRepository::search(&state.db, &lookup).await?;

    Ok(Json(StatementSearchResponse {
        number: statements.len(),
        statements,
    }))
}

/// Delete a statement
#[utoipa::path(
    post,
    path = "/admin/delete_statement",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Statement deleted", body = CodeResponse),
        (status = 400, description = "Missing parameter or bad JSON"),
        (status = 401, description = "Token check failed"),
        (status = 404, description = "Statement not found")
    ),
    tag = "Statements"
)]
pub async fn delete_statement(
    State(state): State<AppState>,
    AdminJson(admin, payload): AdminJson<DeleteRequest>,
) -> AppResult<Json<CodeResponse>> {
    StatementRepository::delete(&state.db, payload.id).await?;
    tracing::info!(admin = %admin.username, statement_id = payload.id, "Statement deleted");

    Ok(Json(CodeResponse { code: SUCCESS_CODE }))
}
