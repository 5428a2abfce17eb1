use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::handlers::{ApiJson, ApiQuery};
use crate::services::{AuthService, Claims};
use crate::state::AppState;

/// Admin requests carry their credentials inline, in the body or query
pub trait Credentials {
    fn username(&self) -> &str;
    fn token(&self) -> &str;
}

/// Admin identity proven by a verified token
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub username: String,
}

impl From<Claims> for AuthAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
        }
    }
}

impl AuthAdmin {
    /// Verify the token against the username it claims to belong to
    pub fn verify<C: Credentials>(credentials: &C, config: &Config) -> AppResult<Self> {
        let claims =
            AuthService::certify_token(credentials.username(), credentials.token(), config)?;
        Ok(claims.into())
    }
}

/// JSON body extractor for admin endpoints.
///
/// The body is decoded first, so malformed or incomplete requests are
/// rejected before the token is looked at.
/// Example: `async fn handler(AdminJson(admin, payload): AdminJson<Req>) -> ... { }`
#[derive(Debug)]
pub struct AdminJson<T>(pub AuthAdmin, pub T);

impl<T> FromRequest<AppState> for AdminJson<T>
where
    T: DeserializeOwned + Credentials,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let ApiJson(payload) = ApiJson::<T>::from_request(req, state).await?;
        let admin = AuthAdmin::verify(&payload, &state.config)?;
        Ok(Self(admin, payload))
    }
}

/// Query string counterpart of [`AdminJson`]
#[derive(Debug)]
pub struct AdminQuery<T>(pub AuthAdmin, pub T);

impl<T> FromRequestParts<AppState> for AdminQuery<T>
where
    T: DeserializeOwned + Credentials,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ApiQuery(params) = ApiQuery::<T>::from_request_parts(parts, state).await?;
        let admin = AuthAdmin::verify(&params, &state.config)?;
        Ok(Self(admin, params))
    }
}
