use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A learned utterance, optionally answering an earlier one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Statement {
    pub id: i32,
    pub text: String,
    pub in_response_to: Option<String>,
    pub conversation: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
}

/// A question/answer pair to learn in one conversation
#[derive(Debug, Deserialize)]
pub struct CreateStatement {
    pub text: String,
    pub response: String,
}
