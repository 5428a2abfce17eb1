pub mod admin;
pub mod chat;
pub mod common;
pub mod rule;
pub mod statement;

pub use admin::{login, LoginRequest, LoginResponse};
pub use chat::{chat, ChatRequest, ChatResponse};
pub use common::{
    validate_content, ApiJson, ApiQuery, CodeResponse, DeleteRequest, SearchParams, SUCCESS_CODE,
};
pub use rule::{
    create_rule, delete_rule, search_rule, CreateRuleRequest, CreateRuleResponse,
    RuleSearchResponse,
};
pub use statement::{
    create_statement, delete_statement, search_statement, CreateStatementRequest,
    CreateStatementResponse, StatementSearchResponse,
};
