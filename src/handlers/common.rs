use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};
use crate::middlewares::Credentials;
use crate::repositories::Lookup;

/// Success marker carried by every successful write response
pub const SUCCESS_CODE: u32 = 1;

/// JSON body extractor that reports failures with business error codes.
///
/// A body that is not JSON at all maps to `JsonFormat`; valid JSON with
/// missing or mistyped fields maps to `Parameter`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("JSON body rejected: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::Parameter,
            JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                AppError::JsonFormat
            }
            _ => AppError::Parameter,
        }
    }
}

/// Query string extractor; any decoding failure is a parameter error
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Query string rejected: {}", rejection.body_text());
        AppError::Parameter
    }
}

/// Query parameters shared by the admin search endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub username: String,
    pub token: String,
    /// Exact id; takes precedence over `text` when non-empty
    pub id: Option<String>,
    /// Exact text match
    pub text: Option<String>,
}

impl SearchParams {
    /// Resolve which lookup the request asks for
    pub fn lookup(&self) -> AppResult<Lookup> {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            let id = id.trim().parse::<i32>().map_err(|_| AppError::Parameter)?;
            return Ok(Lookup::Id(id));
        }

        match self.text.as_deref() {
            Some(text) if !text.is_empty() => Ok(Lookup::Text(text.to_string())),
            _ => Err(AppError::Parameter),
        }
    }
}

/// Body of the admin delete endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub id: i32,
    pub username: String,
    pub token: String,
}

impl Credentials for SearchParams {
    fn username(&self) -> &str {
        &self.username
    }

    fn token(&self) -> &str {
        &self.token
    }
}

impl Credentials for DeleteRequest {
    fn username(&self) -> &str {
        &self.username
    }

    fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CodeResponse {
    pub code: u32,
}

/// True when the value has no visible content
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject empty or whitespace-only text or response values
pub fn validate_content(text: &str, response: &str) -> AppResult<()> {
    if is_blank(text) || is_blank(response) {
        return Err(AppError::EmptyContent);
    }
    Ok(())
}
