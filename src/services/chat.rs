use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::repositories::{RuleRepository, StatementRepository};

/// Where a chat reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Rule,
    Statement,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub source: ReplySource,
}

pub struct ChatService;

impl ChatService {
    /// Pick a reply for `text`.
    ///
    /// Rules win over learned statements; when neither matches the
    /// configured default reply is used.
    pub async fn reply(
        db: &DatabaseConnection,
        text: &str,
        default_response: &str,
    ) -> AppResult<ChatReply> {
        if let Some(rule) = RuleRepository::find_latest_by_text(db, text).await? {
            return Ok(ChatReply {
                response: rule.response,
                source: ReplySource::Rule,
            });
        }

        if let Some(statement) = StatementRepository::find_latest_reply(db, text).await? {
            return Ok(ChatReply {
                response: statement.text,
                source: ReplySource::Statement,
            });
        }

        Ok(ChatReply {
            response: default_response.to_string(),
            source: ReplySource::Default,
        })
    }
}
