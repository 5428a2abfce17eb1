use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::{ApiJson, SUCCESS_CODE};
use crate::repositories::AdminRepository;
use crate::services::AuthService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub code: u32,
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

// ============ Handlers ============

/// Login with username and password
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing parameter or bad JSON"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Find admin by username
    let admin = AdminRepository::find_by_username(&state.db, &payload.username)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::InvalidCredentials,
            other => other,
        })?;

    // Verify password
    let is_valid = AuthService::verify_password(&payload.password, &admin.password_hash)?;
    if !is_valid {
        tracing::info!(username = %payload.username, "Rejected admin login");
        return Err(AppError::InvalidCredentials);
    }

    let expires_in = state.config.token_expires_in;
    let token = AuthService::generate_token(&admin.username, expires_in, &state.config)?;

    Ok(Json(LoginResponse {
        code: SUCCESS_CODE,
        token,
        expires_in,
    }))
}
