use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::{validate_content, CodeResponse, DeleteRequest, SearchParams};
use crate::handlers::SUCCESS_CODE;
use crate::middlewares::{AdminJson, AdminQuery, Credentials};
use crate::models::{CreateRule, Rule};
use crate::repositories::{Repository, RuleRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRuleRequest {
    pub text: String,
    pub response: String,
    pub username: String,
    pub token: String,
}

impl Credentials for CreateRuleRequest {
    fn username(&self) -> &str {
        &self.username
    }

    fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRuleResponse {
    pub code: u32,
    pub rule: Rule,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RuleSearchResponse {
    pub rules: Vec<Rule>,
    pub number: usize,
}

// ============ Handlers ============

/// Create a new rule
#[utoipa::path(
    post,
    path = "/admin/create_rule",
    request_body = CreateRuleRequest,
    responses(
        (status = 200, description = "Rule created", body = CreateRuleResponse),
        (status = 400, description = "Missing parameter, bad JSON or empty text/response"),
        (status = 401, description = "Token check failed")
    ),
    tag = "Rules"
)]
pub async fn create_rule(
    State(state): State<AppState>,
    AdminJson(admin, payload): AdminJson<CreateRuleRequest>,
) -> AppResult<Json<CreateRuleResponse>> {
    validate_content(&payload.text, &payload.response)?;

    let create_rule = CreateRule {
        text: payload.text,
        response: payload.response,
    };

    let rule = RuleRepository::create(&state.db, &create_rule).await?;
    tracing::debug!(admin = %admin.username, rule_id = rule.id, "create_rule");

    Ok(Json(CreateRuleResponse {
        code: SUCCESS_CODE,
        rule,
    }))
}

/// Search rules by id or exact text
#[utoipa::path(
    get,
    path = "/admin/search_rule",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching rules", body = RuleSearchResponse),
        (status = 400, description = "Missing or invalid parameter"),
        (status = 401, description = "Token check failed")
    ),
    tag = "Rules"
)]
pub async fn search_rule(
    State(state): State<AppState>,
    AdminQuery(_admin, params): AdminQuery<SearchParams>,
) -> AppResult<Json<RuleSearchResponse>> {
    let lookup = params.lookup()?;
    let rules = RuleRepository::search(&state.db, &lookup).await?;

    Ok(Json(RuleSearchResponse {
        number: rules.len(),
        rules,
    }))
}

/// Delete a rule
#[utoipa::path(
    post,
    path = "/admin/delete_rule",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Rule deleted", body = CodeResponse),
        (status = 400, description = "Missing parameter or bad JSON"),
        (status = 401, description = "Token check failed"),
        (status = 404, description = "Rule not found")
    ),
    tag = "Rules"
)]
pub async fn delete_rule(
    State(state): State<AppState>,
    AdminJson(admin, payload): AdminJson<DeleteRequest>,
) -> AppResult<Json<CodeResponse>> {
    RuleRepository::delete(&state.db, payload.id).await?;
    tracing::info!(admin = %admin.username, rule_id = payload.id, "Rule deleted");

    Ok(Json(CodeResponse { code: SUCCESS_CODE }))
}
